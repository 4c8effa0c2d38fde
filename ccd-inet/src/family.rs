use crate::InetError;

/// The two address families a directive can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// The maximum prefix length of the family: 32 for IPv4, 128 for IPv6.
    #[inline]
    pub const fn max_prefix_len(&self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

/// Guesses the address family of `text` from its syntax alone.
///
/// A string containing a colon must contain at least two of them to pass
/// as IPv6, and a string containing a dot must contain exactly three to
/// pass as IPv4 (fewer or more is a format error, not the other family).
/// A string with neither separator is not a supported address.
///
/// This is a sniff, not a validation: the actual parsers still reject
/// malformed input of the predicted family.
pub fn predict_family(text: &str) -> Result<AddressFamily, InetError> {
    let colons = text.bytes().filter(|&b| b == b':').count();
    if colons > 0 {
        if colons < 2 {
            return Err(InetError::InvalidAddress(text.to_owned()));
        }
        return Ok(AddressFamily::V6);
    }

    let dots = text.bytes().filter(|&b| b == b'.').count();
    if dots > 0 {
        if dots != 3 {
            return Err(InetError::InvalidAddress(text.to_owned()));
        }
        return Ok(AddressFamily::V4);
    }

    Err(InetError::UnsupportedFamily)
}
