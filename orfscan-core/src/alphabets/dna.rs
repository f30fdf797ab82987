use crate::alphabets::Alphabet;
use crate::error::{BioError, BioResult};
use std::sync::LazyLock;

/// Strict uppercase nucleotide alphabet.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

static ACGT: LazyLock<Alphabet> = LazyLock::new(alphabet);

static COMPLEMENT: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut comp = [0; 256];
    comp.iter_mut().enumerate().for_each(|(v, a)| {
        *a = v as u8;
    });
    b"ACGT".iter().zip(b"TGCA".iter()).for_each(|(&a, &b)| {
        comp[a as usize] = b;
    });
    comp
});

#[inline]
pub fn complement(a: u8) -> u8 {
    COMPLEMENT[a as usize]
}

/// Complement every base and reverse the order.
///
/// Only `A`, `C`, `G` and `T` are accepted; anything else (including
/// lowercase bases and `N`) fails with [`BioError::InvalidBase`] naming the
/// first offending byte.
pub fn reverse_complement(text: &[u8]) -> BioResult<Vec<u8>> {
    if let Some((pos, b)) = ACGT.first_foreign(text) {
        return Err(BioError::InvalidBase {
            ch: b as char,
            pos,
        });
    }
    Ok(text.iter().rev().map(|&a| complement(a)).collect())
}
