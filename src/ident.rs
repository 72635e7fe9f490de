//! The identifier octets of a BER encoded value.
//!
//! This is a private module. The relevant items are re-exported by the
//! parent.

use std::fmt;
use crate::decode::{ContentError, SliceSource};


//------------ Tag -----------------------------------------------------------

/// The tag of a value.
///
/// In ASN.1, tags are used to identify the type of a value. Tags consist of
/// one of four classes, represented by the [`Class`] enum, and a number
/// within this class. The number is an unsigned integer.
///
/// In BER encoding, the tag becomes part of the identifier octets by
/// combining it with a bit indicating whether a value is primitive or
/// constructed. This combination is represented by [`Ident`].
///
/// # Limitations
///
/// We only support tag numbers that fit into a `u32`. This should be more
/// than enough in practice.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    class: Class,
    number: u32,
}

impl Tag {
    /// Creates a tag from a class and number.
    pub const fn new(class: Class, number: u32) -> Self {
        Tag { class, number }
    }

    /// Creates a new tag in class “context dependent” with the given number.
    pub const fn ctx(number: u32) -> Self {
        Self::new(Class::Context, number)
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        self.class
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u32 {
        self.number
    }

    /// Returns the well-known universal type of the tag, if any.
    pub const fn universal(self) -> Option<Universal> {
        match self.class {
            Class::Universal => Universal::from_number(self.number),
            _ => None
        }
    }
}

/// # Constants for often used universal tags.
///
/// See clause 8.4 of ITU Recommendation X.690.
///
impl Tag {
    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::new(Class::Universal, 1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::new(Class::Universal, 2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::new(Class::Universal, 3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::new(Class::Universal, 4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::new(Class::Universal, 5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::new(Class::Universal, 6);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::new(Class::Universal, 16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::new(Class::Universal, 17);
}


//------------ Ident ---------------------------------------------------------

/// The identifier octets of a value.
///
/// This is a tag plus the flag whether the value’s content is constructed
/// from further values or is primitive.
///
/// The `Display` implementation produces the name of the identifier as used
/// in the textual rendering of encoded data. Well-known universal types are
/// shown by name, such as `SEQUENCE` or `INTEGER`. If such a type appears
/// in its unusual encoding, the name is followed by `CONSTRUCTED` or
/// `PRIMITIVE` in brackets, e.g., `[OCTET_STRING CONSTRUCTED]`. All other
/// tags are shown with their class and number in brackets, e.g.,
/// `[APPLICATION 3]`, where the class is left out for context specific tags
/// and `PRIMITIVE` is appended for primitive values, e.g., `[0 PRIMITIVE]`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Ident {
    tag: Tag,
    constructed: bool,
}

impl Ident {
    /// The mask for the class bits in the first octet.
    const CLASS_MASK: u8 = 0xc0;

    /// The mask for the constructed bit in the first octet.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number in the first octet.
    ///
    /// If all these bits are set, the number follows in subsequent octets.
    const SINGLEBYTE_DATA_MASK: u8 = 0x1f;

    /// The mask for octet data in subsequent octets.
    const MULTIBYTE_DATA_MASK: u8 = 0x7f;

    /// The mask for the bit marking that more octets follow.
    const MORE_OCTETS_MASK: u8 = 0x80;

    pub const fn new(tag: Tag, constructed: bool) -> Self {
        Ident { tag, constructed }
    }

    pub const fn primitive(tag: Tag) -> Self {
        Self::new(tag, false)
    }

    pub const fn constructed(tag: Tag) -> Self {
        Self::new(tag, true)
    }

    /// Returns the tag of the identifier.
    pub const fn tag(self) -> Tag {
        self.tag
    }

    /// Returns whether the value is constructed.
    pub const fn is_constructed(self) -> bool {
        self.constructed
    }

    /// Returns the alias of a well-known universal type, if any.
    pub const fn alias(self) -> Option<Alias> {
        match self.tag.universal() {
            Some(universal) => Some(Alias {
                universal,
                toggle_constructed:
                    universal.is_constructed() != self.constructed,
            }),
            None => None,
        }
    }

    /// Takes the identifier octets from the beginning of a source.
    ///
    /// Tag numbers of 31 and above use the high tag number form. This form
    /// must be minimal, i.e., it can’t be used for smaller numbers and the
    /// number can’t start with a zero octet. Numbers beyond a `u32` are
    /// rejected.
    pub fn take_from(
        source: &mut SliceSource
    ) -> Result<Self, ContentError> {
        let first = source.take_u8()?;
        let class = Class::from_u8(first & Self::CLASS_MASK);
        let constructed = first & Self::CONSTRUCTED_MASK != 0;
        let low = first & Self::SINGLEBYTE_DATA_MASK;
        if low != Self::SINGLEBYTE_DATA_MASK {
            return Ok(Self::new(Tag::new(class, u32::from(low)), constructed))
        }

        // Work your way through the multi-octet tag number.
        let pos = source.pos();
        let mut number = 0u32;
        loop {
            let octet = source.take_u8()?;
            if number == 0 && octet == Self::MORE_OCTETS_MASK {
                return Err(ContentError::new(
                    "tag number with leading zero octet", pos
                ))
            }
            if number > u32::MAX >> 7 {
                return Err(ContentError::new(
                    "tag numbers above 32 bits not supported", pos
                ))
            }
            number = number << 7 | u32::from(octet & Self::MULTIBYTE_DATA_MASK);
            if octet & Self::MORE_OCTETS_MASK == 0 {
                break
            }
        }
        if number < u32::from(Self::SINGLEBYTE_DATA_MASK) {
            return Err(ContentError::new(
                "high tag number form for low tag number", pos
            ))
        }
        Ok(Self::new(Tag::new(class, number), constructed))
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(alias) = self.alias() {
            if !alias.toggle_constructed {
                return f.write_str(alias.universal.name())
            }
            return write!(
                f, "[{} {}]",
                alias.universal.name(),
                if self.constructed { "CONSTRUCTED" } else { "PRIMITIVE" }
            )
        }
        match self.tag.class() {
            Class::Universal => write!(f, "[UNIVERSAL ")?,
            Class::Application => write!(f, "[APPLICATION ")?,
            Class::Context => write!(f, "[")?,
            Class::Private => write!(f, "[PRIVATE ")?,
        }
        write!(f, "{}", self.tag.number())?;
        if !self.constructed {
            f.write_str(" PRIMITIVE")?;
        }
        f.write_str("]")
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::Context,
            0xC0..=0xFF => Self::Private
        }
    }
}


//------------ Alias ---------------------------------------------------------

/// The well-known name of an identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Alias {
    /// The universal type the tag refers to.
    pub universal: Universal,

    /// Whether the identifier uses the unusual encoding for the type.
    ///
    /// If this is `true`, the name alone is ambiguous and the display form
    /// needs to spell out whether the value is constructed.
    pub toggle_constructed: bool,
}


//------------ Universal -----------------------------------------------------

/// The universal types that have a well-known name.
///
/// Each type comes with the encoding it normally uses: constructed for
/// SEQUENCE, SET and the handful of types defined via an associated
/// SEQUENCE type, primitive for everything else.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Universal {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    ObjectDescriptor,
    External,
    Real,
    Enumerated,
    EmbeddedPdv,
    Utf8String,
    RelativeOid,
    Time,
    Sequence,
    Set,
    NumericString,
    PrintableString,
    T61String,
    VideotexString,
    Ia5String,
    UtcTime,
    GeneralizedTime,
    GraphicString,
    VisibleString,
    GeneralString,
    UniversalString,
    CharacterString,
    BmpString,
    Date,
    TimeOfDay,
    DateTime,
    Duration,
    OidIri,
    RelativeOidIri,
}

impl Universal {
    /// Returns the type for a universal tag number.
    pub const fn from_number(number: u32) -> Option<Self> {
        Some(match number {
            1 => Self::Boolean,
            2 => Self::Integer,
            3 => Self::BitString,
            4 => Self::OctetString,
            5 => Self::Null,
            6 => Self::ObjectIdentifier,
            7 => Self::ObjectDescriptor,
            8 => Self::External,
            9 => Self::Real,
            10 => Self::Enumerated,
            11 => Self::EmbeddedPdv,
            12 => Self::Utf8String,
            13 => Self::RelativeOid,
            14 => Self::Time,
            16 => Self::Sequence,
            17 => Self::Set,
            18 => Self::NumericString,
            19 => Self::PrintableString,
            20 => Self::T61String,
            21 => Self::VideotexString,
            22 => Self::Ia5String,
            23 => Self::UtcTime,
            24 => Self::GeneralizedTime,
            25 => Self::GraphicString,
            26 => Self::VisibleString,
            27 => Self::GeneralString,
            28 => Self::UniversalString,
            29 => Self::CharacterString,
            30 => Self::BmpString,
            31 => Self::Date,
            32 => Self::TimeOfDay,
            33 => Self::DateTime,
            34 => Self::Duration,
            35 => Self::OidIri,
            36 => Self::RelativeOidIri,
            _ => return None
        })
    }

    /// Returns the universal tag of the type.
    pub const fn tag(self) -> Tag {
        Tag::new(Class::Universal, self.number())
    }

    /// Returns the universal tag number of the type.
    pub const fn number(self) -> u32 {
        match self {
            Self::Boolean => 1,
            Self::Integer => 2,
            Self::BitString => 3,
            Self::OctetString => 4,
            Self::Null => 5,
            Self::ObjectIdentifier => 6,
            Self::ObjectDescriptor => 7,
            Self::External => 8,
            Self::Real => 9,
            Self::Enumerated => 10,
            Self::EmbeddedPdv => 11,
            Self::Utf8String => 12,
            Self::RelativeOid => 13,
            Self::Time => 14,
            Self::Sequence => 16,
            Self::Set => 17,
            Self::NumericString => 18,
            Self::PrintableString => 19,
            Self::T61String => 20,
            Self::VideotexString => 21,
            Self::Ia5String => 22,
            Self::UtcTime => 23,
            Self::GeneralizedTime => 24,
            Self::GraphicString => 25,
            Self::VisibleString => 26,
            Self::GeneralString => 27,
            Self::UniversalString => 28,
            Self::CharacterString => 29,
            Self::BmpString => 30,
            Self::Date => 31,
            Self::TimeOfDay => 32,
            Self::DateTime => 33,
            Self::Duration => 34,
            Self::OidIri => 35,
            Self::RelativeOidIri => 36,
        }
    }

    /// Returns the name used for the type in the textual rendering.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::BitString => "BIT_STRING",
            Self::OctetString => "OCTET_STRING",
            Self::Null => "NULL",
            Self::ObjectIdentifier => "OBJECT_IDENTIFIER",
            Self::ObjectDescriptor => "OBJECT_DESCRIPTOR",
            Self::External => "EXTERNAL",
            Self::Real => "REAL",
            Self::Enumerated => "ENUMERATED",
            Self::EmbeddedPdv => "EMBEDDED_PDV",
            Self::Utf8String => "UTF8String",
            Self::RelativeOid => "RELATIVE_OID",
            Self::Time => "TIME",
            Self::Sequence => "SEQUENCE",
            Self::Set => "SET",
            Self::NumericString => "NumericString",
            Self::PrintableString => "PrintableString",
            Self::T61String => "T61String",
            Self::VideotexString => "VideotexString",
            Self::Ia5String => "IA5String",
            Self::UtcTime => "UTCTime",
            Self::GeneralizedTime => "GeneralizedTime",
            Self::GraphicString => "GraphicString",
            Self::VisibleString => "VisibleString",
            Self::GeneralString => "GeneralString",
            Self::UniversalString => "UniversalString",
            Self::CharacterString => "CHARACTER_STRING",
            Self::BmpString => "BMPString",
            Self::Date => "DATE",
            Self::TimeOfDay => "TIME_OF_DAY",
            Self::DateTime => "DATE_TIME",
            Self::Duration => "DURATION",
            Self::OidIri => "OID_IRI",
            Self::RelativeOidIri => "RELATIVE_OID_IRI",
        }
    }

    /// Returns whether the type normally uses constructed encoding.
    pub const fn is_constructed(self) -> bool {
        matches!(
            self,
            Self::External | Self::EmbeddedPdv | Self::Sequence | Self::Set
            | Self::CharacterString
        )
    }
}


//============ Tests =========================================================
