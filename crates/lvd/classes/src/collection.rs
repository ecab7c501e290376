//! Semantic classes for containers and pointers.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use lvd_semantic::{
    Base, CheckPolicy, ElementRule, ForwardDeref, SemanticClass, Validates, Wrapped,
};

/// A container with at least one element.
///
/// Default construction is prohibited: every default container is empty.
#[derive(Debug)]
pub enum NonEmpty {}

impl SemanticClass for NonEmpty {
    const NAME: &'static str = "NonEmpty";
    type Kind = Wrapped;
    const CTOR_DEFAULT: CheckPolicy = CheckPolicy::Prohibit;
}

impl Validates<String> for NonEmpty {
    fn is_valid(cv: &String) -> bool {
        !cv.is_empty()
    }
}

impl<'a> Validates<&'a str> for NonEmpty {
    fn is_valid(cv: &&'a str) -> bool {
        !cv.is_empty()
    }
}

impl<T> Validates<Vec<T>> for NonEmpty {
    fn is_valid(cv: &Vec<T>) -> bool {
        !cv.is_empty()
    }
}

impl<T> Validates<VecDeque<T>> for NonEmpty {
    fn is_valid(cv: &VecDeque<T>) -> bool {
        !cv.is_empty()
    }
}

impl<K, V> Validates<BTreeMap<K, V>> for NonEmpty {
    fn is_valid(cv: &BTreeMap<K, V>) -> bool {
        !cv.is_empty()
    }
}

impl<K, V, H: BuildHasher> Validates<HashMap<K, V, H>> for NonEmpty {
    fn is_valid(cv: &HashMap<K, V, H>) -> bool {
        !cv.is_empty()
    }
}

/// Elements come back raw.
impl ElementRule<usize> for NonEmpty {
    type Output = Base;
}

/// A pointer or optional value that is present.
#[derive(Debug)]
pub enum NonNull {}

impl SemanticClass for NonNull {
    const NAME: &'static str = "NonNull";
    type Kind = Wrapped;
    const CTOR_DEFAULT: CheckPolicy = CheckPolicy::Prohibit;
}

impl ForwardDeref for NonNull {}

impl<T> Validates<Option<T>> for NonNull {
    fn is_valid(cv: &Option<T>) -> bool {
        cv.is_some()
    }
}

impl<T: ?Sized> Validates<*const T> for NonNull {
    fn is_valid(cv: &*const T) -> bool {
        !cv.is_null()
    }
}

impl<T: ?Sized> Validates<*mut T> for NonNull {
    fn is_valid(cv: &*mut T) -> bool {
        !cv.is_null()
    }
}

macro_rules! never_null {
    ($($ptr:ident),*) => {
        $(
            impl<T: ?Sized> Validates<$ptr<T>> for NonNull {
                fn is_valid(_cv: &$ptr<T>) -> bool {
                    true
                }
            }
        )*
    };
}

never_null!(Box, Rc, Arc);

/// A vector in non-decreasing order.
#[derive(Debug)]
pub enum Sorted {}

impl SemanticClass for Sorted {
    const NAME: &'static str = "Sorted";
    type Kind = Wrapped;
}

impl<T: Ord> Validates<Vec<T>> for Sorted {
    fn is_valid(cv: &Vec<T>) -> bool {
        cv.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<T: Ord> Validates<VecDeque<T>> for Sorted {
    fn is_valid(cv: &VecDeque<T>) -> bool {
        cv.iter().zip(cv.iter().skip(1)).all(|(a, b)| a <= b)
    }
}

impl ElementRule<usize> for Sorted {
    type Output = Base;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lvd_semantic::{Boundary, SV};

    #[test]
    fn non_empty_containers() {
        assert!(SV::<NonEmpty, String>::new("a".into()).is_ok());
        assert!(SV::<NonEmpty, &str>::new("").is_err());
        assert!(SV::<NonEmpty, Vec<u8>>::new(vec![]).is_err());
        assert!(SV::<NonEmpty, VecDeque<u8>>::new(VecDeque::from([1])).is_ok());
        assert!(SV::<NonEmpty, BTreeMap<u8, u8>>::new(BTreeMap::new()).is_err());
        let mut m = HashMap::new();
        m.insert("k", 1);
        assert!(SV::<NonEmpty, HashMap<&str, i32>>::new(m).is_ok());
    }

    #[test]
    fn element_access_is_raw() {
        let v = SV::<NonEmpty, Vec<i32>>::new(vec![3, 1, 2]).unwrap();
        assert_eq!(v[0_usize], 3);
        let second: i32 = v.elem(1_usize).unwrap();
        assert_eq!(second, 1);
    }

    #[test]
    fn non_null_forwards_deref() {
        let b = SV::<NonNull, Box<String>>::new(Box::new("text".to_owned())).unwrap();
        assert_eq!(b.len(), 4);
        let rc = SV::<NonNull, Rc<[i32]>>::new(Rc::from(vec![1, 2])).unwrap();
        assert_eq!(rc.iter().sum::<i32>(), 3);
        assert!(SV::<NonNull, Option<i32>>::new(None).is_err());
        assert!(SV::<NonNull, *const u8>::new(std::ptr::null()).is_err());
        let x = 5_u8;
        assert!(SV::<NonNull, *const u8>::new(&x as *const u8).is_ok());
    }

    #[test]
    fn sorted_insert_through_a_mutator() {
        let mut v = SV::<Sorted, Vec<i32>>::try_default().unwrap();
        {
            let mut m = v.mutator();
            m.extend([1, 4, 9]);
            m.finish().unwrap();
        }
        let mut m = v.mutator();
        m.push(2);
        let err = m.finish().unwrap_err();
        assert_eq!(err.boundary(), Boundary::Mutation);
        assert_eq!(v.cv(), &vec![1, 4, 9]);

        let mut m = v.mutator();
        let at = m.partition_point(|&x| x < 2);
        m.insert(at, 2);
        m.finish().unwrap();
        assert_eq!(v.cv(), &vec![1, 2, 4, 9]);
    }

    #[test]
    fn non_empty_grows_in_place() {
        let mut s = SV::<NonEmpty, String>::new("ab".into()).unwrap();
        s.try_add_assign("cd").unwrap();
        assert_eq!(s.cv(), "abcd");
        {
            let mut m = s.mutation();
            m.push('!');
        }
        assert_eq!(s.to_string(), "abcd!");
    }
}
