#[cfg(test)]
mod config_test {
    use rstest::rstest;
    use sparsex::{Orientation, SparseDoubleVector, VectorConfig, VectorError};

    #[rstest]
    #[case(1, 0.01)]
    #[case(1, 0.5)]
    #[case(10, 0.75)]
    #[case(1_000, 0.999)]
    fn test_valid_config_constructs(#[case] capacity: usize, #[case] fill_factor: f64) {
        let vector = SparseDoubleVector::with_capacity(capacity, fill_factor, Orientation::Row)
            .expect("valid configuration");
        assert_eq!(vector.get_capacity(), capacity);
        assert!(vector.is_empty());
    }

    #[rstest]
    #[case(0, 0.75, "capacity")]
    #[case(10, 0.0, "fill_factor")]
    #[case(10, 1.0, "fill_factor")]
    #[case(10, 1.5, "fill_factor")]
    #[case(10, -0.25, "fill_factor")]
    #[case(10, f64::NAN, "fill_factor")]
    #[case(10, f64::INFINITY, "fill_factor")]
    fn test_invalid_config_rejected(
        #[case] capacity: usize,
        #[case] fill_factor: f64,
        #[case] expected: &str,
    ) {
        let config = VectorConfig::default()
            .with_capacity(capacity)
            .with_fill_factor(fill_factor);
        match SparseDoubleVector::with_config(config) {
            Err(VectorError::InvalidConfiguration { parameter, .. }) => {
                assert_eq!(parameter, expected)
            }
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[rstest]
    #[case(Orientation::Row, true)]
    #[case(Orientation::Column, false)]
    fn test_orientation_is_metadata(#[case] orientation: Orientation, #[case] horizontal: bool) {
        let config = VectorConfig::default().with_orientation(orientation);
        let mut vector = SparseDoubleVector::with_config(config).unwrap();
        vector.add_all_double(&[1.0, 2.0]);
        vector.set_double(9, 3.0);
        assert_eq!(vector.is_horizontal(), horizontal);
        assert_eq!(vector.orientation(), orientation);
        assert_eq!(vector.to_dense()[9], 3.0);
        assert_eq!(vector.count(), 3);
    }

    #[rstest]
    #[case(&[], 10)]
    #[case(&[1.0], 2)]
    #[case(&[1.0, 2.0, 3.0, 4.0, 5.0], 7)]
    fn test_from_slice_fits_capacity(#[case] data: &[f64], #[case] capacity: usize) {
        let vector = SparseDoubleVector::from_slice(data);
        assert_eq!(vector.get_capacity(), capacity);
        assert_eq!(vector.config().fill_factor, 0.75);
        assert_eq!(vector.size(), data.len());
    }
}
