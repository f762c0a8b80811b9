#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::models::observation::EpochId;
    use crate::parsing::epoch::{EpochTable, EPOCH_COLUMNS};

    fn sample_table() -> EpochTable {
        EpochTable::from_rows(vec![
            [0.0, 20.0, 0.5, 20.0, 0.5, 10.0, 0.2],
            [1.0, 22.0, 0.5, 0.0, 0.5, 19.0, 0.3],
        ])
    }

    #[test]
    fn test_adapter_extracts_fields() {
        let table = sample_table();
        let obs = table.observation(1, EpochId::new(4)).unwrap();

        assert_eq!(obs.source_id(), 1);
        assert_eq!(obs.epoch(), EpochId::new(4));
        assert_eq!(obs.ra().value(), 22.0);
        assert_eq!(obs.ra_sigma().value(), 0.5);
        assert_eq!(obs.dec().value(), 0.0);
        assert_eq!(obs.dec_sigma().value(), 0.5);
        assert_eq!(obs.flux(), 19.0);
        assert_eq!(obs.flux_sigma(), 0.3);
    }

    #[test]
    fn test_adapter_rejects_out_of_range_selector() {
        let table = sample_table();
        let err = table.observation(2, EpochId::new(0)).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { row: 2, .. }));
    }

    #[test]
    fn test_adapter_rejects_non_finite_fields() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let table = EpochTable::from_rows(vec![[0.0, bad, 0.5, 20.0, 0.5, 10.0, 0.2]]);
            let err = table.observation(0, EpochId::new(0)).unwrap_err();
            assert!(matches!(err, Error::MalformedRecord { row: 0, .. }));
        }
    }

    #[test]
    fn test_adapter_rejects_negative_uncertainties() {
        let table = EpochTable::from_rows(vec![[0.0, 20.0, -0.5, 20.0, 0.5, 10.0, 0.2]]);
        let err = table.observation(0, EpochId::new(0)).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { row: 0, .. }));
    }

    #[test]
    fn test_try_from_records_checks_width() {
        let records = vec![vec![0.0; EPOCH_COLUMNS], vec![0.0; EPOCH_COLUMNS - 1]];
        let err = EpochTable::try_from_records(&records).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { row: 1, .. }));

        let good = vec![vec![0.0, 1.0, 0.1, 2.0, 0.1, 3.0, 0.1]];
        let table = EpochTable::try_from_records(&good).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_observations_fails_on_any_bad_row() {
        let table = EpochTable::from_rows(vec![
            [0.0, 20.0, 0.5, 20.0, 0.5, 10.0, 0.2],
            [1.0, f64::NAN, 0.5, 0.0, 0.5, 19.0, 0.3],
        ]);
        assert!(table.observations(EpochId::new(0)).is_err());
    }

    #[test]
    fn test_observations_preserve_row_order() {
        let table = sample_table();
        let all = table.observations(EpochId::new(1)).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].source_id(), 0);
        assert_eq!(all[1].source_id(), 1);
    }
}
