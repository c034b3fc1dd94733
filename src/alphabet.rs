use crate::StringMapError;

/// The inclusive byte range spanned by every pattern of a set.
///
/// Bytes are mapped onto dense edge codes `byte - min_char`, so each trie node
/// only needs `alphabet_size` edge slots instead of 256.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Alphabet {
    min_char: u8,
    max_char: u8,
}

impl Alphabet {
    /// Scans all patterns once and returns the byte range they cover.
    ///
    /// Fails with [`StringMapError::EmptyPattern`] on the first empty pattern,
    /// and with [`StringMapError::NoPatterns`] if there is nothing to scan.
    pub(crate) fn scan<K: AsRef<[u8]>>(patterns: &[K]) -> Result<Self, StringMapError> {
        if patterns.is_empty() {
            return Err(StringMapError::NoPatterns);
        }

        let mut min_char = u8::MAX;
        let mut max_char = u8::MIN;
        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(StringMapError::EmptyPattern { index });
            }
            for &byte in pattern {
                min_char = min_char.min(byte);
                max_char = max_char.max(byte);
            }
        }

        Ok(Self { min_char, max_char })
    }

    #[inline]
    pub(crate) fn min_char(&self) -> u8 {
        self.min_char
    }

    #[inline]
    pub(crate) fn max_char(&self) -> u8 {
        self.max_char
    }

    /// Number of distinct edge codes, `max_char - min_char + 1`.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        (self.max_char - self.min_char) as usize + 1
    }

    /// Edge code of a byte known to belong to the pattern set.
    #[inline]
    pub(crate) fn offset(&self, byte: u8) -> usize {
        debug_assert!(
            (self.min_char..=self.max_char).contains(&byte),
            "byte {byte:#04x} outside alphabet {:#04x}..={:#04x}",
            self.min_char,
            self.max_char
        );
        (byte - self.min_char) as usize
    }

    /// Returns the edge code for `byte`, or `None` if the byte lies outside the range.
    #[inline]
    pub(crate) fn code(&self, byte: u8) -> Option<usize> {
        // Wrapping keeps bytes below min_char out of range as well.
        let code = byte.wrapping_sub(self.min_char) as usize;
        if code < self.size() {
            Some(code)
        } else {
            None
        }
    }
}
