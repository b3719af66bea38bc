use std::collections::{BTreeMap, HashMap, LinkedList, VecDeque};

use super::Encode;

use crate::key::EncodeKey;

fn encode_seq<'a, T: Encode + 'a>(elements: impl IntoIterator<Item = &'a T>, out: &mut String) {
    out.push('[');

    for (i, element) in elements.into_iter().enumerate() {
        if i != 0 {
            out.push(',');
        }

        element.encode(out);
    }

    out.push(']');
}

fn encode_map<'a, K: EncodeKey + 'a, V: Encode + 'a>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    out: &mut String,
) {
    out.push('{');

    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i != 0 {
            out.push(',');
        }

        key.encode_key(out);
        out.push(':');
        value.encode(out);
    }

    out.push('}');
}

impl<T: Encode> Encode for [T] {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_seq(self, out)
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_seq(self, out)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_seq(self, out)
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_seq(self, out)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_seq(self, out)
    }
}

macro_rules! encode_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            fn encode(&self, out: &mut String) {
                out.push('[');
                $(
                    if $idx != 0 {
                        out.push(',');
                    }
                    self.$idx.encode(out);
                )+
                out.push(']');
            }
        }
    };
}

encode_tuple!(A 0);
encode_tuple!(A 0, B 1);
encode_tuple!(A 0, B 1, C 2);
encode_tuple!(A 0, B 1, C 2, D 3);
encode_tuple!(A 0, B 1, C 2, D 3, E 4);
encode_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
encode_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
encode_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

impl<K: EncodeKey, V: Encode, S> Encode for HashMap<K, V, S> {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_map(self, out)
    }
}

impl<K: EncodeKey, V: Encode> Encode for BTreeMap<K, V> {
    #[inline]
    fn encode(&self, out: &mut String) {
        encode_map(self, out)
    }
}

impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode(&self, out: &mut String) {
        match self {
            Some(value) => value.encode(out),
            None => out.push_str("null"),
        }
    }
}
