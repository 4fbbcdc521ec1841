use sentinel_scan::prelude::*;
use sentinel_scan::scan::classic;
use test_case::test_case;

fn is_even(i: &i32) -> bool {
    i % 2 == 0
}

#[test_case(&[1, 2, 3], 2 ; "present")]
#[test_case(&[1, 2, 3], 7 ; "absent")]
#[test_case(&[], 1 ; "empty")]
#[test_case(&[5, 5, 5], 5 ; "first of duplicates")]
fn locate_agrees_with_classic_and_std(data: &[i32], value: i32) {
    let expected = data.iter().position(|&x| x == value).unwrap_or(data.len());

    let classic_pos = classic::locate(data.begin(), data.end(), &value);
    let sentinel_pos = scan::locate(data.begin(), data.end(), &value);

    assert_eq!(classic_pos.position(), expected);
    assert_eq!(sentinel_pos, classic_pos);
}

#[test_case(&[1, 2, 3] ; "mixed")]
#[test_case(&[1, 3, 5] ; "all odd")]
#[test_case(&[2, 4] ; "all even")]
#[test_case(&[] ; "empty")]
fn predicate_scans_agree_with_classic(data: &[i32]) {
    let (b, e) = (data.begin(), data.end());

    assert_eq!(scan::locate_if(b, e, is_even), classic::locate_if(b, e, is_even));
    assert_eq!(
        scan::locate_if_not(b, e, is_even),
        classic::locate_if_not(b, e, is_even)
    );
    assert_eq!(scan::all_of(b, e, is_even), classic::all_of(b, e, is_even));
    assert_eq!(scan::any_of(b, e, is_even), classic::any_of(b, e, is_even));
    assert_eq!(scan::none_of(b, e, is_even), classic::none_of(b, e, is_even));
    assert_eq!(scan::count_if(b, e, is_even), classic::count_if(b, e, is_even));

    assert_eq!(scan::all_of(b, e, is_even), data.iter().all(is_even));
    assert_eq!(scan::any_of(b, e, is_even), data.iter().any(is_even));
}

#[test_case(&[1, 1, 2, 1], 1, 3)]
#[test_case(&[1, 1, 2, 1], 2, 1)]
#[test_case(&[1, 1, 2, 1], 9, 0)]
fn count_agrees_with_classic(data: &[i32], value: i32, expected: usize) {
    assert_eq!(scan::count(data.begin(), data.end(), &value), expected);
    assert_eq!(classic::count(data.begin(), data.end(), &value), expected);
}

#[test]
fn distance_for_cursor_pair() {
    let v = vec![1, 2, 3, 4, 5];
    let stop = until_value(4).or(v.end());

    let expected = v.iter().position(|&x| x == 4).unwrap();
    assert_eq!(scan::distance(v.begin(), stop), expected);
}

#[test]
fn distance_for_bounds() {
    let v = vec![1, 2, 3, 4, 5];
    let region = bounds(v.begin(), until_value(4).or(v.end()));

    assert_eq!(region.distance(), 3);
}

#[test]
fn distance_for_empty_range() {
    let v: Vec<i32> = Vec::new();
    let stop = until_value(4).or(v.end());

    assert_eq!(scan::distance(v.begin(), stop), classic::distance(v.begin(), v.end()));
}

#[test]
fn bounds_locate_matches_std() {
    let v = vec![1, 2, 3];
    let region = bounds(v.begin(), v.end());

    assert_eq!(region.locate(&2).position(), 1);
    assert_eq!(region.locate_if(|i| *i > 1).position(), 1);
    assert_eq!(region.count_if(|i| *i > 1), 2);
}

#[test]
fn bounds_iterator_feeds_std_adaptors() {
    let v = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let region = bounds(v.begin(), until_value(9).or(v.end()));

    let total: i32 = region.iter().sum();
    assert_eq!(total, 3 + 1 + 4 + 1 + 5);

    let doubled: Vec<i32> = region.into_iter().map(|i| i * 2).collect();
    assert_eq!(doubled, vec![6, 2, 8, 2, 10]);
}

#[test]
fn extremes_on_empty_region_are_errors() {
    let v = vec![4, 5];
    let stop = until_value(4).or(v.end());

    assert_eq!(
        scan::locate_min(v.begin(), stop),
        Err(sentinel_scan::ScanError::EmptyRange {
            algorithm: "locate_min"
        })
    );
    assert!(bounds(v.begin(), stop).locate_max_by(|a, b| a.cmp(b)).is_err());
}
