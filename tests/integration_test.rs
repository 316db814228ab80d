use index_mask::bitmap::to_bool_vecs;
use index_mask::codec::{IndexReader, MaskWriter};
use index_mask::column::IndexColumn;
use index_mask::host::{self, HostValue};
use index_mask::{convert, ConvertConfig, Converter, ErrorKind, MaskError, Parallelism};

fn masks(batch: &[Vec<u64>], length: u64) -> Vec<Vec<bool>> {
    to_bool_vecs(convert(batch, length).unwrap())
}

#[test]
fn test_two_sets() {
    assert_eq!(
        masks(&[vec![0, 2], vec![1]], 3),
        vec![vec![true, false, true], vec![false, true, false]]
    );
}

#[test]
fn test_empty_set_is_all_false() {
    assert_eq!(masks(&[vec![]], 5), vec![vec![false; 5]]);
}

#[test]
fn test_out_of_range_value() {
    let err = convert(&[vec![4u64]], 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err, MaskError::Range { set: 0, element: 0, value: 4, length: 3 });
}

#[test]
fn test_empty_batch() {
    let batch: Vec<Vec<u64>> = Vec::new();
    assert!(convert(&batch, 10).unwrap().is_empty());
}

#[test]
fn test_duplicates_collapse() {
    assert_eq!(masks(&[vec![0, 0, 0]], 1), vec![vec![true]]);
}

#[test]
fn test_zero_length() {
    assert_eq!(masks(&[vec![], vec![]], 0), vec![Vec::<bool>::new(), Vec::new()]);
    let err = convert(&[vec![], vec![0u64]], 0).unwrap_err();
    assert_eq!(err.set_position(), Some(1));
}

#[test]
fn test_same_position_in_different_sets() {
    assert_eq!(masks(&[vec![1], vec![1], vec![0, 1]], 2), vec![
        vec![false, true],
        vec![false, true],
        vec![true, true],
    ]);
}

#[test]
fn test_large_batch_parallel() {
    let batch: Vec<Vec<u64>> = (0..500u64).map(|i| vec![i, (i * 31) % 1000]).collect();
    let converter = Converter::new(
        ConvertConfig::new().with_parallelism(Parallelism::Parallel).with_threads(3),
    );
    let result = converter.convert(&batch, 1000).unwrap();
    assert_eq!(result.len(), 500);
    for (i, mask) in result.iter().enumerate() {
        let i = i as u64;
        assert_eq!(mask.len(), 1000);
        let mut expected = vec![i as usize, ((i * 31) % 1000) as usize];
        expected.sort_unstable();
        expected.dedup();
        assert_eq!(mask.positions().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_host_call_roundtrip() {
    let cells = HostValue::Cell(vec![
        HostValue::Array(IndexColumn::UInt16(vec![2])),
        HostValue::Array(IndexColumn::UInt64(vec![])),
    ]);
    let out = host::call(&[cells, HostValue::from(3u64)], 1).unwrap();
    assert_eq!(out.len(), 1);
    let result = out.into_iter().next().and_then(HostValue::into_masks).unwrap();
    assert_eq!(to_bool_vecs(result), vec![vec![false, false, true], vec![false; 3]]);
}

#[test]
fn test_host_arity() {
    let err = host::call(&[], 1).unwrap_err();
    assert_eq!(err.identifier(), "index_mask:arity");
}

#[test]
fn test_text_pipeline() {
    let cells = IndexReader::new().read_str("0,2\n1\n");
    let out = host::call(&[cells, HostValue::from(3u64)], 1).unwrap();
    let result = out.into_iter().next().and_then(HostValue::into_masks).unwrap();
    assert_eq!(MaskWriter::new().write_text(&result), "1,0,1\n0,1,0\n");
}

#[test]
fn test_text_pipeline_rejects_words() {
    let cells = IndexReader::new().read_str("0\nseven\n");
    let err = host::call(&[cells, HostValue::from(3u64)], 1).unwrap_err();
    assert_eq!(err, MaskError::ElementType { set: 1, found: "char".into() });
}

#[test]
fn test_text_pipeline_negative_value() {
    let cells = IndexReader::new().read_str("-1\n");
    let err = host::call(&[cells, HostValue::from(3u64)], 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("value -1"));
}
