use super::*;
use proptest::prelude::*;

fn pairs(orfs: &[Orf]) -> Vec<(usize, usize)> {
    orfs.iter().map(|o| (o.start, o.length)).collect()
}

// ─── single frame ───────────────────────────────────────────

#[test]
fn simple_orf_frame_one() {
    let r = find_orfs(b"ATGCCCTAA");
    assert_eq!(pairs(r.get(Frame::One)), vec![(1, 9)]);
    assert!(r.get(Frame::Two).is_empty());
    assert!(r.get(Frame::Three).is_empty());
}

#[test]
fn start_without_stop_is_absent() {
    let r = find_orfs(b"ATG");
    assert!(r.get(Frame::One).is_empty());
    assert!(r.is_empty());
}

#[test]
fn positions_are_absolute_in_later_frames() {
    // frame2 codons: ATG AAA TGA
    let r = find_orfs(b"CATGAAATGAC");
    assert_eq!(pairs(r.get(Frame::Two)), vec![(2, 9)]);

    // frame3 codons: ATG TAG
    let r = find_orfs(b"GGATGTAG");
    assert_eq!(pairs(r.get(Frame::Three)), vec![(3, 6)]);
}

#[test]
fn each_stop_codon_closes() {
    for stop in ["TAA", "TAG", "TGA"] {
        let seq = format!("ATGGGG{stop}");
        let r = find_orfs(seq.as_bytes());
        assert_eq!(pairs(r.get(Frame::One)), vec![(1, 9)], "stop {stop}");
    }
}

#[test]
fn lowercase_codons_do_not_match() {
    assert!(find_orfs(b"atgccctaa").is_empty());
}

// ─── pairing rules ──────────────────────────────────────────

#[test]
fn nested_starts_share_a_stop() {
    // ATG ATG CCC TAA
    let r = find_orfs(b"ATGATGCCCTAA");
    assert_eq!(pairs(r.get(Frame::One)), vec![(1, 12), (4, 9)]);
}

#[test]
fn consecutive_orfs() {
    // ATG AAA TAA ATG CCC TAG
    let r = find_orfs(b"ATGAAATAAATGCCCTAG");
    assert_eq!(pairs(r.get(Frame::One)), vec![(1, 9), (10, 9)]);
}

#[test]
fn stop_before_first_start_ignored() {
    // TAA ATG CCC TGA
    let r = find_orfs(b"TAAATGCCCTGA");
    assert_eq!(pairs(r.get(Frame::One)), vec![(4, 9)]);
}

#[test]
fn unterminated_start_ends_frame() {
    // ATG TAA ATG CCC ATG ... no stop after the second ATG, so the third
    // start is never examined even though nothing follows it either.
    let r = find_orfs(b"ATGTAAATGCCCATGCCC");
    assert_eq!(pairs(r.get(Frame::One)), vec![(1, 6)]);
}

#[test]
fn start_directly_followed_by_stop() {
    let r = find_orfs(b"ATGTGA");
    assert_eq!(pairs(r.get(Frame::One)), vec![(1, 6)]);
}

// ─── edge inputs ────────────────────────────────────────────

#[test]
fn empty_and_short_sequences() {
    assert!(find_orfs(b"").is_empty());
    assert!(find_orfs(b"A").is_empty());
    assert!(find_orfs(b"AT").is_empty());
    assert!(find_orfs_in_frame(b"A", Frame::Three).is_empty());
}

#[test]
fn partial_trailing_codon_never_matches() {
    // frame1: ATG CCC TA
    assert!(find_orfs(b"ATGCCCTA").get(Frame::One).is_empty());
}

// ─── result helpers ─────────────────────────────────────────

#[test]
fn sentinel_pairs_for_empty_frames() {
    let r = find_orfs(b"ATGCCCTAA");
    let p = r.to_pairs();
    assert_eq!(p[0], ("frame1", vec![(1, 9)]));
    assert_eq!(p[1], ("frame2", vec![(-1, 0)]));
    assert_eq!(p[2], ("frame3", vec![(-1, 0)]));
}

#[test]
fn longest_prefers_first_on_ties() {
    // frame1: ATG AAA TAA ATG CCC TAG -> two ORFs of 9
    let r = find_orfs(b"ATGAAATAAATGCCCTAG");
    assert_eq!(r.longest_in(Frame::One), Some(Orf { start: 1, length: 9 }));
    let (frame, orf) = r.longest().unwrap();
    assert_eq!(frame, Frame::One);
    assert_eq!(orf.start, 1);
}

#[test]
fn longest_across_frames() {
    // frame2 holds the longer ORF: C ATG AAA AAA TGA
    let r = find_orfs(b"CATGAAAAAATGA");
    let (frame, orf) = r.longest().unwrap();
    assert_eq!(frame, Frame::Two);
    assert_eq!(orf.length, 12);
    assert_eq!(orf.end(), 13);
}

#[test]
fn span_slices_the_orf() {
    let seq = b"GGATGTAG";
    let orf = find_orfs(seq).get(Frame::Three)[0];
    assert_eq!(&seq[orf.span()], b"ATGTAG");
}

#[test]
fn frame_labels_and_offsets() {
    for (i, f) in Frame::ALL.iter().enumerate() {
        assert_eq!(f.offset(), i);
        assert_eq!(Frame::from_offset(i), Some(*f));
    }
    assert_eq!(Frame::from_offset(3), None);
    assert_eq!(Frame::Two.to_string(), "frame2");
}

// ─── properties ─────────────────────────────────────────────

proptest! {
    #[test]
    fn orfs_are_well_formed(seq in "[ACGT]{0,120}") {
        let bytes = seq.as_bytes();
        let r = find_orfs(bytes);
        for (frame, orfs) in r.iter() {
            for orf in orfs {
                prop_assert_eq!(orf.length % 3, 0);
                prop_assert!(orf.length >= 6);
                // Every codon before the start in this frame is complete.
                prop_assert_eq!((orf.start - 1 - frame.offset()) % 3, 0);
                let span = &bytes[orf.span()];
                prop_assert_eq!(&span[..3], START_CODON.as_slice());
                prop_assert!(is_stop(&span[span.len() - 3..]));
                // No stop codon occurs in frame before the closing one.
                for codon in span[..span.len() - 3].chunks(3) {
                    prop_assert!(!is_stop(codon));
                }
            }
            let starts: Vec<usize> = orfs.iter().map(|o| o.start).collect();
            let mut sorted = starts.clone();
            sorted.sort_unstable();
            prop_assert_eq!(starts, sorted);
        }
    }

    #[test]
    fn early_exit_matches_skipping_unpaired_starts(seq in "[ACGT]{0,120}") {
        // Skip-ahead pairing: try every start, drop those without a stop.
        let bytes = seq.as_bytes();
        for frame in Frame::ALL {
            let codons: Vec<&[u8]> = bytes.get(frame.offset()..).unwrap_or(&[]).chunks(3).collect();
            let mut expected = Vec::new();
            for (i, c) in codons.iter().enumerate() {
                if *c != START_CODON.as_slice() {
                    continue;
                }
                if let Some(j) = (i + 1..codons.len()).find(|&j| is_stop(codons[j])) {
                    expected.push((frame.offset() + i * 3 + 1, (j - i + 1) * 3));
                }
            }
            prop_assert_eq!(pairs(&find_orfs_in_frame(bytes, frame)), expected);
        }
    }
}
