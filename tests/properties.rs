use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use tritvec::trit_vectors::prelude::*;
use tritvec::{
    NoIndex, RankIndex, RsFullIndex, RsIndex, Serializable, TritVector, TritVectorData,
};

fn check_directory<const TARGET: u8>(trits: &[u8]) -> Result<(), TestCaseError> {
    let data = TritVectorData::from_trits(trits.iter().copied()).unwrap();
    let index = RsIndex::<TARGET>::new(&data);
    let tv = TritVector::new(data, index);

    // Walking the sequence checks rank at every position, the unit rank
    // increment at occurrences, and the rank/select inverse in one pass.
    let mut count = 0usize;
    for (pos, &t) in trits.iter().enumerate() {
        prop_assert_eq!(tv.rank(pos), Some(count));
        if t == TARGET {
            prop_assert_eq!(tv.select(count), Some(pos));
            count += 1;
        }
    }
    prop_assert_eq!(tv.num_target_trits(), count);
    prop_assert_eq!(tv.rank(trits.len()), None);
    prop_assert_eq!(tv.select(count), None);
    Ok(())
}

fn check_rank_only<const TARGET: u8>(trits: &[u8]) -> Result<(), TestCaseError> {
    let data = TritVectorData::from_trits(trits.iter().copied()).unwrap();
    let lean = TritVector::new(data.clone(), RankIndex::<TARGET>::new(&data));
    let reference: TritVector<NoIndex<TARGET>> = data.into();

    for pos in 0..trits.len() {
        prop_assert_eq!(lean.rank(pos), reference.rank(pos));
    }
    prop_assert_eq!(lean.num_target_trits(), reference.num_target_trits());
    Ok(())
}

proptest! {
    #[test]
    fn access_roundtrip(trits in prop::collection::vec(0u8..3, 0..600)) {
        let data = TritVectorData::from_trits(trits.iter().copied()).unwrap();
        prop_assert_eq!(data.len(), trits.len());
        for (pos, &t) in trits.iter().enumerate() {
            prop_assert_eq!(data.access(pos), Some(t));
        }
        prop_assert_eq!(data.access(trits.len()), None);
    }

    #[test]
    fn rs_directory_properties(trits in prop::collection::vec(0u8..3, 0..600)) {
        check_directory::<0>(&trits)?;
        check_directory::<1>(&trits)?;
        check_directory::<2>(&trits)?;
    }

    #[test]
    fn rank_only_matches_reference(trits in prop::collection::vec(0u8..3, 0..600)) {
        check_rank_only::<0>(&trits)?;
        check_rank_only::<1>(&trits)?;
        check_rank_only::<2>(&trits)?;
    }

    #[test]
    fn target_counts_partition_the_sequence(trits in prop::collection::vec(0u8..3, 0..600)) {
        let tv = TritVector::<RsFullIndex>::from_trits(trits.iter().copied()).unwrap();
        let total: usize = (0..3u8)
            .map(|t| tv.num_target_trits_of(t).unwrap())
            .sum();
        prop_assert_eq!(total, trits.len());
    }

    #[test]
    fn data_serialization_roundtrip(trits in prop::collection::vec(0u8..3, 0..600)) {
        let data = TritVectorData::from_trits(trits.iter().copied()).unwrap();
        let mut buf = Vec::new();
        data.save_into(&mut buf).unwrap();
        prop_assert_eq!(buf.len(), data.size_in_bytes());
        let other = TritVectorData::load_from(&buf[..]).unwrap();
        prop_assert_eq!(data, other);
    }

    #[test]
    fn directory_serialization_answers_identically(
        trits in prop::collection::vec(0u8..3, 1..600),
    ) {
        let data = TritVectorData::from_trits(trits.iter().copied()).unwrap();
        let index = RsIndex::<1>::new(&data);

        let mut buf = Vec::new();
        index.save_into(&mut buf).unwrap();
        let loaded = RsIndex::<1>::load_from(&buf[..]).unwrap();
        prop_assert_eq!(&index, &loaded);

        let original = TritVector::new(data.clone(), index);
        let rebound = TritVector::new(data, loaded);
        for pos in 0..trits.len() {
            prop_assert_eq!(original.rank(pos), rebound.rank(pos));
        }
        for k in 0..original.num_target_trits() {
            prop_assert_eq!(original.select(k), rebound.select(k));
        }
    }

    #[test]
    fn wrapper_serialization_roundtrip(trits in prop::collection::vec(0u8..3, 0..600)) {
        let tv = TritVector::<RsFullIndex>::from_trits(trits.iter().copied()).unwrap();
        let mut buf = Vec::new();
        tv.save_into(&mut buf).unwrap();
        let other = TritVector::<RsFullIndex>::load_from(&buf[..]).unwrap();
        prop_assert_eq!(tv, other);
    }
}
