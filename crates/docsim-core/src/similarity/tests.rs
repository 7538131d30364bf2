#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use crate::similarity::{euclidean_distance, pseudo_cosine_score, MatrixBuilder};
    use crate::vector::{DocumentVector, TermVector};

    fn vector(weights: &[(&str, f64)]) -> TermVector {
        weights.iter().map(|(t, w)| (*t, *w)).collect()
    }

    fn doc1() -> TermVector {
        vector(&[
            ("hallo", 3.5),
            ("ich", 2.5),
            ("bin", 3.8),
            ("ein", 1.2),
            ("test", 2.5),
        ])
    }

    fn doc2() -> TermVector {
        vector(&[
            ("hallo", 1.5),
            ("ich", 3.5),
            ("bin", 2.8),
            ("ein", 4.2),
            ("test", 3.5),
        ])
    }

    fn doc3() -> TermVector {
        vector(&[
            ("hallo", 0.9),
            ("ich", 2.9),
            ("bin", 1.8),
            ("ein", 2.2),
            ("test", 4.5),
        ])
    }

    fn corpus(vectors: Vec<TermVector>) -> Vec<DocumentVector> {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, vector)| DocumentVector {
                id: format!("doc-{}", i + 1),
                vector,
            })
            .collect()
    }

    #[test]
    fn test_euclidean_fixture() {
        let distance = euclidean_distance(&doc1(), &doc2());
        assert!((distance - 4.0).abs() < 1e-12, "got {}", distance);
        assert_eq!(distance, euclidean_distance(&doc1(), &doc2()));
    }

    #[test]
    fn test_euclidean_absent_keys_count_as_zero() {
        let a = vector(&[("x", 3.0)]);
        let b = vector(&[("y", 4.0)]);
        assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-12);
        assert_eq!(euclidean_distance(&a, &b), euclidean_distance(&b, &a));
    }

    #[test]
    fn test_euclidean_empty_vectors() {
        assert_eq!(euclidean_distance(&TermVector::new(), &TermVector::new()), 0.0);
    }

    #[test]
    fn test_pseudo_cosine_fixture() {
        let score = pseudo_cosine_score(&doc1(), &doc2());
        let expected = (3.5 * 1.5 + 2.5 * 3.5 + 3.8 * 2.8 + 1.2 * 4.2 + 2.5 * 3.5) / 5.0_f64.sqrt();
        assert!((score - expected).abs() < 1e-12, "got {}", score);
        assert!((score - 17.186418475063384).abs() < 1e-9);
    }

    #[test]
    fn test_pseudo_cosine_self_score() {
        let a = doc1();
        let sum_sq: f64 = a.iter().map(|(_, w)| w * w).sum();
        let expected = sum_sq / (a.len() as f64).sqrt();
        assert!((pseudo_cosine_score(&a, &a) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_pseudo_cosine_is_not_norm_divided() {
        // A true cosine of a vector with itself is 1.0
        let a = vector(&[("x", 2.0), ("y", 2.0)]);
        let score = pseudo_cosine_score(&a, &a);
        assert!((score - 8.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_pseudo_cosine_symmetric() {
        let a = vector(&[("x", 1.5), ("y", -2.0), ("z", 0.5)]);
        let b = vector(&[("y", 3.0), ("w", 7.0)]);
        assert_eq!(pseudo_cosine_score(&a, &b), pseudo_cosine_score(&b, &a));
        assert_eq!(
            pseudo_cosine_score(&doc1(), &doc3()),
            pseudo_cosine_score(&doc3(), &doc1())
        );
    }

    #[test]
    fn test_pseudo_cosine_counts_unshared_terms_in_denominator() {
        let a = vector(&[("x", 2.0), ("y", 1.0)]);
        let b = vector(&[("x", 3.0), ("z", 1.0)]);
        // union {x, y, z}, shared {x}
        assert!((pseudo_cosine_score(&a, &b) - 6.0 / 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_pseudo_cosine_empty_is_zero() {
        assert_eq!(pseudo_cosine_score(&TermVector::new(), &TermVector::new()), 0.0);
        assert_eq!(pseudo_cosine_score(&doc1(), &TermVector::new()), 0.0);
    }

    #[test]
    fn test_pseudo_cosine_disjoint_is_positive_zero() {
        let score = pseudo_cosine_score(&vector(&[("x", 1.0)]), &vector(&[("y", 1.0)]));
        assert_eq!(score, 0.0);
        assert!(!score.is_sign_negative());
    }

    #[test]
    fn test_matrix_empty_and_single_corpus() {
        let builder = MatrixBuilder::new();
        assert!(builder.build(&[]).is_empty());
        assert!(builder.build(&corpus(vec![doc1()])).is_empty());
    }

    #[test]
    fn test_matrix_fixture() {
        let matrix = MatrixBuilder::new().build(&corpus(vec![doc1(), doc2(), doc3()]));
        assert_eq!(matrix.len(), 6);

        let pairs: Vec<(&str, &str)> = matrix
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("doc-1", "doc-2"),
                ("doc-1", "doc-3"),
                ("doc-2", "doc-3"),
                ("doc-2", "doc-1"),
                ("doc-3", "doc-2"),
                ("doc-3", "doc-1"),
            ]
        );

        let max = pseudo_cosine_score(&doc2(), &doc3());
        let expected = pseudo_cosine_score(&doc1(), &doc2()) / max;
        assert!((matrix.links()[0].value - expected).abs() < 1e-12);
        assert_eq!(matrix.links()[2].value, 1.0);
    }

    #[test]
    fn test_matrix_bounds() {
        let vectors: Vec<TermVector> = (0..15)
            .map(|i| {
                vector(&[
                    ("shared", 1.0 + i as f64),
                    ("odd", if i % 2 == 1 { 2.0 } else { 0.5 }),
                    (["a", "b", "c"][i % 3], 1.0),
                ])
            })
            .collect();
        let docs = corpus(vectors);
        let matrix = MatrixBuilder::new().build(&docs);

        assert_eq!(matrix.len(), docs.len() * 10);
        assert!(matrix.iter().all(|l| (0.0..=1.0).contains(&l.value)));
        assert!(matrix.iter().any(|l| l.value == 1.0));
        for doc in &docs {
            let values: Vec<f64> = matrix.links_from(&doc.id).map(|l| l.value).collect();
            assert_eq!(values.len(), 10);
            assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_matrix_small_corpus_keeps_all_pairs() {
        let docs = corpus(vec![doc1(), doc2(), doc3(), doc1()]);
        let matrix = MatrixBuilder::new().build(&docs);
        assert_eq!(matrix.len(), 4 * 3);
    }

    #[test]
    fn test_matrix_custom_top_k() {
        let docs = corpus(vec![doc1(), doc2(), doc3(), doc2()]);
        let matrix = MatrixBuilder::new().with_top_k(1).build(&docs);
        assert_eq!(matrix.len(), 4);
    }

    #[test]
    fn test_matrix_ties_keep_generation_order() {
        let same = vector(&[("x", 1.0)]);
        let docs = corpus(vec![same.clone(), same.clone(), same.clone(), same]);
        let matrix = MatrixBuilder::new().build(&docs);

        let targets: Vec<&str> = matrix.links_from("doc-3").map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["doc-1", "doc-2", "doc-4"]);
    }

    #[test]
    fn test_matrix_global_max_uses_dropped_pairs() {
        // doc-1/doc-2 share a heavy term but doc-3 keeps only its best link,
        // the normalizer still sees every pair
        let docs = corpus(vec![
            vector(&[("x", 10.0)]),
            vector(&[("x", 10.0)]),
            vector(&[("x", 1.0)]),
        ]);
        let matrix = MatrixBuilder::new().with_top_k(1).build(&docs);
        let from_three: Vec<f64> = matrix.links_from("doc-3").map(|l| l.value).collect();
        assert_eq!(from_three.len(), 1);
        assert!((from_three[0] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_no_positive_score_is_empty() {
        let docs = corpus(vec![vector(&[("x", 1.0)]), vector(&[("y", 1.0)])]);
        assert!(MatrixBuilder::new().build(&docs).is_empty());
    }

    #[test]
    fn test_matrix_negative_scores_floor_at_zero() {
        let docs = corpus(vec![
            vector(&[("x", 1.0)]),
            vector(&[("x", -1.0)]),
            vector(&[("x", 1.0)]),
        ]);
        let matrix = MatrixBuilder::new().build(&docs);

        let values: Vec<f64> = matrix.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(matrix.iter().all(|l| !l.value.is_sign_negative()));
        let targets: Vec<&str> = matrix.links_from("doc-1").map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["doc-3", "doc-2"]);
    }

    #[test]
    fn test_matrix_disjoint_pairs_have_no_negative_zero() {
        let docs = corpus(vec![
            vector(&[("x", 1.0)]),
            vector(&[("x", 2.0)]),
            vector(&[("y", 1.0)]),
        ]);
        let matrix = MatrixBuilder::new().build(&docs);

        let unrelated: Vec<f64> = matrix.links_from("doc-3").map(|l| l.value).collect();
        assert_eq!(unrelated, vec![0.0, 0.0]);
        assert!(matrix.iter().all(|l| !l.value.is_sign_negative()));
    }

    #[test]
    fn test_matrix_parallel_matches_sequential() {
        let docs = corpus(vec![doc1(), doc2(), doc3(), doc2(), doc1()]);
        let parallel = MatrixBuilder::new().with_parallel(true).build(&docs);
        let sequential = MatrixBuilder::new().with_parallel(false).build(&docs);
        assert_eq!(parallel, sequential);
    }
}
