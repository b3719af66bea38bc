/*!
The structural categories of types the codec understands.

Each shape has exactly one decoding and one encoding strategy. A type picks
its shape once, where it implements [`Shaped`], so there's no runtime type
inspection while decoding or encoding. Types that don't implement `Shaped`
can't be decoded or encoded at all.
*/

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, LinkedList, VecDeque},
};

/**
The structural category of a type.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A struct described by `record!`, encoded as an object.
    Record,
    /// A growable list, encoded as an array.
    Sequence,
    /// An array with a fixed number of slots.
    FixedArray,
    /// A map from keys to values, encoded as an object.
    Map,
    /// A fixed sequence of differently typed values, encoded as an array.
    Tuple,
    /// A value that may be `null`.
    Optional,
    Bool,
    Number,
    /// A single character, encoded as a one-character string.
    Char,
    /// An owned string.
    String,
    /// A string borrowed from the input.
    StringView,
    /// An enumeration described by `enumeration!`, encoded as its integral value.
    Enum,
    /// Any JSON value, with its structure decided by the input.
    Value,
}

/**
A type with a known shape.
*/
pub trait Shaped {
    const SHAPE: Shape;
}

macro_rules! shaped {
    ($shape:ident => $($ty:ty),+) => {
        $(
            impl Shaped for $ty {
                const SHAPE: Shape = Shape::$shape;
            }
        )+
    };
}

shaped!(Bool => bool);
shaped!(Number => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
shaped!(Char => char);
shaped!(String => String, str);

impl<'a> Shaped for &'a str {
    const SHAPE: Shape = Shape::StringView;
}

impl<'a> Shaped for Cow<'a, str> {
    const SHAPE: Shape = Shape::String;
}

impl<T> Shaped for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;
}

impl<T> Shaped for VecDeque<T> {
    const SHAPE: Shape = Shape::Sequence;
}

impl<T> Shaped for LinkedList<T> {
    const SHAPE: Shape = Shape::Sequence;
}

impl<T> Shaped for [T] {
    const SHAPE: Shape = Shape::Sequence;
}

impl<T, const N: usize> Shaped for [T; N] {
    const SHAPE: Shape = Shape::FixedArray;
}

impl<K, V, S> Shaped for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::Map;
}

impl<K, V> Shaped for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::Map;
}

impl<T> Shaped for Option<T> {
    const SHAPE: Shape = Shape::Optional;
}

impl<T: Shaped + ?Sized> Shaped for Box<T> {
    const SHAPE: Shape = T::SHAPE;
}

macro_rules! shaped_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Shaped for ($($name,)+) {
            const SHAPE: Shape = Shape::Tuple;
        }
    };
}

shaped_tuple!(A);
shaped_tuple!(A, B);
shaped_tuple!(A, B, C);
shaped_tuple!(A, B, C, D);
shaped_tuple!(A, B, C, D, E);
shaped_tuple!(A, B, C, D, E, F);
shaped_tuple!(A, B, C, D, E, F, G);
shaped_tuple!(A, B, C, D, E, F, G, H);
