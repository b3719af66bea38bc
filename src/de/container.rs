use std::{
    collections::{BTreeMap, HashMap, LinkedList, VecDeque},
    hash::{BuildHasher, Hash},
};

use super::{Cursor, Decode, Str};

use crate::{error::Error, key::DecodeKey};

/**
Decode the elements of an array.

The `element` function is called with the index of each element and a cursor
positioned at its value. Empty arrays never call it. A trailing comma is an error.
*/
pub(crate) fn decode_array<'de>(
    cursor: &mut Cursor<'de>,
    mut element: impl FnMut(usize, &mut Cursor<'de>) -> Result<(), Error>,
) -> Result<(), Error> {
    cursor.eat(b'[', "`[`")?;
    cursor.enter()?;

    if !cursor.eat_if(b']') {
        let mut index = 0;

        loop {
            cursor.skip_whitespace();
            element(index, cursor)?;
            index += 1;

            cursor.skip_whitespace();
            match cursor.peek_or_eof()? {
                b',' => cursor.bump(),
                b']' => {
                    cursor.bump();
                    break;
                }
                _ => return Err(cursor.unexpected("`,` or `]`")),
            }
        }
    }

    cursor.leave();
    Ok(())
}

/**
Decode the members of an object.

The `member` function is called with the still-escaped key of each member and
a cursor positioned just after its `:`. Empty objects never call it.
A trailing comma is an error.
*/
pub(crate) fn decode_object<'de>(
    cursor: &mut Cursor<'de>,
    mut member: impl FnMut(Str<'de>, &mut Cursor<'de>) -> Result<(), Error>,
) -> Result<(), Error> {
    cursor.eat(b'{', "`{`")?;
    cursor.enter()?;

    if !cursor.eat_if(b'}') {
        loop {
            let key = cursor.scan_str()?;
            cursor.eat(b':', "`:`")?;

            member(key, cursor)?;

            cursor.skip_whitespace();
            match cursor.peek_or_eof()? {
                b',' => cursor.bump(),
                b'}' => {
                    cursor.bump();
                    break;
                }
                _ => return Err(cursor.unexpected("`,` or `}`")),
            }
        }
    }

    cursor.leave();
    Ok(())
}

#[inline]
fn decode_seq<'de, T: Decode<'de> + Default>(
    cursor: &mut Cursor<'de>,
    mut push: impl FnMut(T),
) -> Result<(), Error> {
    decode_array(cursor, |_, cursor| {
        let mut element = T::default();
        element.decode(cursor)?;

        push(element);
        Ok(())
    })
}

impl<'de, T: Decode<'de> + Default> Decode<'de> for Vec<T> {
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        self.clear();

        decode_seq(cursor, |element| self.push(element))
    }
}

impl<'de, T: Decode<'de> + Default> Decode<'de> for VecDeque<T> {
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        self.clear();

        decode_seq(cursor, |element| self.push_back(element))
    }
}

impl<'de, T: Decode<'de> + Default> Decode<'de> for LinkedList<T> {
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        self.clear();

        decode_seq(cursor, |element| self.push_back(element))
    }
}

impl<'de, T: Decode<'de>, const N: usize> Decode<'de> for [T; N] {
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        // a short array leaves the remaining slots as they were
        decode_array(cursor, |index, cursor| match self.get_mut(index) {
            Some(slot) => slot.decode(cursor),
            None => Err(cursor.unexpected("`]`")),
        })
    }
}

macro_rules! decode_tuple {
    ($($name:ident $idx:tt),+) => {
        impl<'de, $($name: Decode<'de>),+> Decode<'de> for ($($name,)+) {
            fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
                decode_array(cursor, |index, cursor| match index {
                    $($idx => self.$idx.decode(cursor),)+
                    _ => Err(cursor.unexpected("`]`")),
                })
            }
        }
    };
}

decode_tuple!(A 0);
decode_tuple!(A 0, B 1);
decode_tuple!(A 0, B 1, C 2);
decode_tuple!(A 0, B 1, C 2, D 3);
decode_tuple!(A 0, B 1, C 2, D 3, E 4);
decode_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
decode_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
decode_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

impl<'de, K, V, S> Decode<'de> for HashMap<K, V, S>
where
    K: DecodeKey<'de> + Eq + Hash,
    V: Decode<'de> + Default,
    S: BuildHasher,
{
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        // existing entries are kept; a repeated key decodes over the previous value
        decode_object(cursor, |key, cursor| {
            let key = K::from_key(key)?;

            self.entry(key).or_default().decode(cursor)
        })
    }
}

impl<'de, K, V> Decode<'de> for BTreeMap<K, V>
where
    K: DecodeKey<'de> + Ord,
    V: Decode<'de> + Default,
{
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        decode_object(cursor, |key, cursor| {
            let key = K::from_key(key)?;

            self.entry(key).or_default().decode(cursor)
        })
    }
}

impl<'de, T: Decode<'de> + Default> Decode<'de> for Option<T> {
    fn decode(&mut self, cursor: &mut Cursor<'de>) -> Result<(), Error> {
        cursor.skip_whitespace();

        if let Some(b'n') = cursor.peek() {
            cursor.match_literal("null")?;
            *self = None;

            return Ok(());
        }

        let mut value = T::default();
        value.decode(cursor)?;

        *self = Some(value);
        Ok(())
    }
}
