/*!
Macros that describe records and enumerations to the codec.
*/

/**
Describe the fields of a struct so it can be decoded from and encoded to a JSON object.

The struct is declared as usual, then its fields are listed once, in order.
Each field is keyed by its name unless a different key is given with `= "key"`:

```
#[derive(Debug, Default, PartialEq)]
struct Message {
    id: u64,
    r#type: String,
    tags: Vec<String>,
}

acorn_json::record!(Message { id, r#type = "type", tags });

let message: Message = acorn_json::from_str(r#"{"type":"greeting","id":1,"tags":[]}"#).unwrap();

assert_eq!("greeting", message.r#type);
```

Records with a lifetime parameter bind it to the input, so their fields can
borrow strings directly from the JSON being decoded:

```
#[derive(Debug, Default)]
struct Book<'a> {
    title: &'a str,
    authors: Vec<&'a str>,
}

acorn_json::record!(Book<'a> { title, authors });

let book: Book = acorn_json::from_str(r#"{"title":"C++ Templates","authors":["Vandevoorde"]}"#).unwrap();

assert_eq!("C++ Templates", book.title);
```
*/
#[macro_export]
macro_rules! record {
    ($name:ident < $lt:lifetime > { $($field:ident $(= $key:literal)?),* $(,)? }) => {
        impl<$lt> $crate::Shaped for $name<$lt> {
            const SHAPE: $crate::Shape = $crate::Shape::Record;
        }

        impl<$lt> $crate::Record<$lt> for $name<$lt> {
            $crate::__record_fields!($name; $lt; $($field $(= $key)?),*);
        }

        impl<$lt> $crate::Decode<$lt> for $name<$lt> {
            #[inline]
            fn decode(&mut self, cursor: &mut $crate::Cursor<$lt>) -> Result<(), $crate::Error> {
                $crate::de::decode_record(self, cursor)
            }
        }

        impl<$lt> $crate::Encode for $name<$lt> {
            #[inline]
            fn encode(&self, out: &mut String) {
                $crate::ser::encode_record(self, out)
            }
        }
    };
    ($name:ident { $($field:ident $(= $key:literal)?),* $(,)? }) => {
        impl $crate::Shaped for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Record;
        }

        impl<'de> $crate::Record<'de> for $name {
            $crate::__record_fields!($name; 'de; $($field $(= $key)?),*);
        }

        impl<'de> $crate::Decode<'de> for $name {
            #[inline]
            fn decode(&mut self, cursor: &mut $crate::Cursor<'de>) -> Result<(), $crate::Error> {
                $crate::de::decode_record(self, cursor)
            }
        }

        impl $crate::Encode for $name {
            #[inline]
            fn encode(&self, out: &mut String) {
                $crate::ser::encode_record(self, out)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_fields {
    ($name:ident; $lt:lifetime; $($field:ident $(= $key:literal)?),*) => {
        fn registry() -> &'static $crate::FieldRegistry {
            static REGISTRY: $crate::__private::OnceCell<$crate::FieldRegistry> =
                $crate::__private::OnceCell::new();

            REGISTRY.get_or_init(|| {
                $crate::FieldRegistry::new(
                    stringify!($name),
                    &[$($crate::__record_key!($field $(= $key)?)),*],
                )
            })
        }

        // fields are matched by counting down through the declaration
        #[allow(unused_mut, unused_assignments, unused_variables)]
        fn decode_field(
            &mut self,
            field: $crate::Field,
            cursor: &mut $crate::Cursor<$lt>,
        ) -> Result<(), $crate::Error> {
            let mut slot = field.index();
            $(
                if slot == 0 {
                    return $crate::Decode::decode(&mut self.$field, cursor);
                }
                slot -= 1;
            )*

            Err(cursor.error($crate::ErrorKind::UnknownKey(
                Self::registry().key(field).to_owned(),
            )))
        }

        #[allow(unused_mut, unused_assignments, unused_variables)]
        fn encode_field(&self, field: $crate::Field, out: &mut String) {
            let mut slot = field.index();
            $(
                if slot == 0 {
                    return $crate::Encode::encode(&self.$field, out);
                }
                slot -= 1;
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_key {
    ($field:ident = $key:literal) => {
        $key
    };
    ($field:ident) => {
        stringify!($field)
    };
}

/**
Describe a fieldless enum so it can be decoded from and encoded to its integral value.

The enum must be `Copy` and its variants listed with the integer type they're represented as.
An integer that doesn't match any variant fails to decode.

```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Level {
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
}

acorn_json::enumeration!(Level: u8 { Debug, Info, Warn });

assert_eq!(Level::Warn, acorn_json::from_str::<Level>("3").unwrap());
assert_eq!("2", acorn_json::to_string(&Level::Info));
```
*/
#[macro_export]
macro_rules! enumeration {
    ($name:ident : $repr:ty { $($variant:ident),* $(,)? }) => {
        impl $crate::Shaped for $name {
            const SHAPE: $crate::Shape = $crate::Shape::Enum;
        }

        impl<'de> $crate::Decode<'de> for $name {
            fn decode(&mut self, cursor: &mut $crate::Cursor<'de>) -> Result<(), $crate::Error> {
                cursor.skip_whitespace();
                let offset = cursor.offset();

                let mut repr: $repr = 0;
                $crate::Decode::decode(&mut repr, cursor)?;

                $(
                    if repr == $name::$variant as $repr {
                        *self = $name::$variant;
                        return Ok(());
                    }
                )*

                Err(cursor.error_at($crate::ErrorKind::InvalidEnumValue(repr as i128), offset))
            }
        }

        impl $crate::Encode for $name {
            #[inline]
            fn encode(&self, out: &mut String) {
                $crate::Encode::encode(&(*self as $repr), out)
            }
        }
    };
}
