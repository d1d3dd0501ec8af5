use std::any::Any;
use std::cell::RefCell;
use std::cmp::{self, Ordering};
use std::rc::Rc;

use crate::array::{Array, SortInterface};
use crate::{Comparer, Lesser};

/// Reference [`Lesser`]/[`Comparer`] conformance for a native integer.
///
/// Statically typed call sites should prefer the derived `Ord`; the protocol
/// impls exist for heterogeneous capability lists, see [`int_comparers`] and
/// [`int_lessers`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Int(pub i32);

impl Lesser for Int {
    fn less(&self, other: &dyn Lesser) -> bool {
        self.0 < downcast_int(other.as_any()).0
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Comparer for Int {
    fn compare(&self, other: &dyn Comparer) -> i32 {
        match self.0.cmp(&downcast_int(other.as_any()).0) {
            Ordering::Less => -1,
            Ordering::Greater => 1,
            Ordering::Equal => 0,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn downcast_int(v: &dyn Any) -> &Int {
    v.downcast_ref::<Int>()
        .unwrap_or_else(|| panic!("Int compared against a different concrete type"))
}

/// Boxes each input value as an [`Int`] comparer, preserving order.
/// An empty input yields an empty, non-allocating vec.
pub fn int_comparers(values: &[i32]) -> Vec<Box<dyn Comparer>> {
    values
        .iter()
        .map(|&v| Box::new(Int(v)) as Box<dyn Comparer>)
        .collect()
}

/// Boxes each input value as an [`Int`] lesser, preserving order.
/// An empty input yields an empty, non-allocating vec.
pub fn int_lessers(values: &[i32]) -> Vec<Box<dyn Lesser>> {
    values
        .iter()
        .map(|&v| Box::new(Int(v)) as Box<dyn Lesser>)
        .collect()
}

/// Packed `i32` sequence satisfying [`Array`].
///
/// An `IntArray` is a `start`/`len` window over storage shared through an
/// `Rc`, so [`Array::sub`] views alias their parent. Nothing here locks;
/// cross-thread discipline is the caller's job, and the `Rc` backing keeps
/// the type single-threaded by construction.
pub struct IntArray {
    data: Rc<RefCell<Vec<i32>>>,
    start: usize,
    len: usize,
}

impl IntArray {
    /// Adopts `values` as the backing storage of a full-width window.
    pub fn new(values: Vec<i32>) -> Self {
        let len = values.len();
        IntArray {
            data: Rc::new(RefCell::new(values)),
            start: 0,
            len,
        }
    }

    /// Copies the window's values back out.
    pub fn to_vec(&self) -> Vec<i32> {
        let data = self.data.borrow();
        data[self.start..self.start + self.len].to_vec()
    }

    // Windows over a larger parent must reject indices the backing storage
    // would otherwise accept.
    fn check_index(&self, i: usize) {
        assert!(
            i < self.len,
            "index {i} out of range for length {}",
            self.len
        );
    }
}

impl SortInterface for IntArray {
    fn len(&self) -> usize {
        self.len
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.check_index(i);
        self.check_index(j);

        let data = self.data.borrow();
        data[self.start + i] < data[self.start + j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.check_index(i);
        self.check_index(j);

        self.data.borrow_mut().swap(self.start + i, self.start + j);
    }
}

impl Array for IntArray {
    fn clone_array(&self) -> Box<dyn Array> {
        Box::new(IntArray::new(self.to_vec()))
    }

    fn get(&self, i: usize) -> Box<dyn Any> {
        self.check_index(i);

        Box::new(self.data.borrow()[self.start + i])
    }

    fn set(&mut self, i: usize, value: Box<dyn Any>) {
        self.check_index(i);

        let value = *value
            .downcast::<i32>()
            .unwrap_or_else(|_| panic!("IntArray::set expects an i32 payload"));
        self.data.borrow_mut()[self.start + i] = value;
    }

    fn sub(&self, start: usize, end: usize) -> Box<dyn Array> {
        assert!(
            start <= end && end <= self.len,
            "invalid window [{start}, {end}) for length {}",
            self.len
        );

        Box::new(IntArray {
            data: Rc::clone(&self.data),
            start: self.start + start,
            len: end - start,
        })
    }

    fn copy_from(&mut self, start: usize, src: &dyn Array) {
        let src = src
            .as_any()
            .downcast_ref::<IntArray>()
            .unwrap_or_else(|| panic!("IntArray::copy_from expects an IntArray source"));
        assert!(
            start <= self.len,
            "start {start} out of range for length {}",
            self.len
        );

        let count = cmp::min(self.len - start, src.len);
        let dst_start = self.start + start;

        if Rc::ptr_eq(&self.data, &src.data) {
            // Same backing storage, the windows may overlap.
            self.data
                .borrow_mut()
                .copy_within(src.start..src.start + count, dst_start);
        } else {
            let from = src.data.borrow();
            self.data.borrow_mut()[dst_start..dst_start + count]
                .copy_from_slice(&from[src.start..src.start + count]);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
