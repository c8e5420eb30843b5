//! Unit tests for utils/matrix.rs

use compalign::config::ScoringMatrix;
use compalign::core::AlignError;
use compalign::utils::matrix::{get_index, get_score, packed_matrix, packed_matrix_by_name};

#[test]
fn test_unpack_agrees_with_packed_lookup() {
    for matrix in ScoringMatrix::ALL {
        let packed = packed_matrix(matrix);
        let full = packed.unpack().unwrap();
        for a in packed.symbols.bytes() {
            for b in packed.symbols.bytes() {
                let expected = get_score(packed, a, b);
                assert_eq!(
                    full.score(a, b),
                    expected,
                    "{} {}{}",
                    packed.name,
                    a as char,
                    b as char
                );
                assert_eq!(
                    full.score(a.to_ascii_lowercase(), b.to_ascii_lowercase()),
                    expected,
                    "{} lower {}{}",
                    packed.name,
                    a as char,
                    b as char
                );
                assert_eq!(full.score(a.to_ascii_lowercase(), b), expected);
                assert_eq!(full.score(a, b.to_ascii_lowercase()), expected);
            }
        }
        assert_eq!(full.score(b'!', b'A'), packed.defscore);
    }
}

#[test]
fn test_unpacked_standard_matrices_are_symmetric() {
    for matrix in ScoringMatrix::ALL {
        let full = packed_matrix(matrix).unpack().unwrap();
        for a in b'A'..=b'Z' {
            for b in b'A'..=b'Z' {
                assert_eq!(
                    full.score(a, b),
                    full.score(b, a),
                    "{} {}{}",
                    matrix,
                    a as char,
                    b as char
                );
            }
        }
    }
}

#[test]
fn test_lookup_by_name() {
    let packed = packed_matrix_by_name("pam30").unwrap();
    assert_eq!(packed.name, "PAM30");
    assert_eq!(get_index(packed, b'a'), get_index(packed, b'A'));
    assert_eq!(
        packed_matrix_by_name("GONNET").map(|m| m.name),
        Err(AlignError::UnknownMatrix("GONNET".to_string()))
    );
}
