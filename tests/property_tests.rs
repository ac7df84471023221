use quakeclump::cluster::{assign, update, DrawSequence, FixedCentroids, Kmeans};
use quakeclump::PointStore;
use proptest::prelude::*;

fn store_from(points: &[Vec<f64>]) -> PointStore {
    PointStore::from_coords(points.iter().map(|p| [p[0], p[1]]))
}

proptest! {
    #[test]
    fn prop_every_record_in_exactly_one_cluster(
        points in prop::collection::vec(prop::collection::vec(-180.0f64..180.0, 2), 1..40),
        k in 1usize..6,
        rounds in 1i64..6,
        seed in any::<u64>(),
    ) {
        // Skip if k > n
        if k <= points.len() {
            let store = store_from(&points);
            let fit = Kmeans::new(k).with_iterations(rounds).with_seed(seed).fit(&store).unwrap();

            prop_assert_eq!(fit.clusters.len(), k);
            let mut ids: Vec<usize> = fit.clusters.iter().flatten().copied().collect();
            ids.sort_unstable();
            let expected: Vec<usize> = (1..=points.len()).collect();
            prop_assert_eq!(ids, expected);
        }
    }

    #[test]
    fn prop_injected_seeding_is_deterministic(
        points in prop::collection::vec(prop::collection::vec(-50.0f64..50.0, 2), 3..30),
        rounds in 0i64..5,
    ) {
        let store = store_from(&points);
        let model = Kmeans::new(3).with_iterations(rounds);
        let a = model.fit_with(&store, &mut DrawSequence::new(vec![1, 2, 3])).unwrap();
        let b = model.fit_with(&store, &mut DrawSequence::new(vec![1, 2, 3])).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_stable_partition_is_a_fixed_point(
        points in prop::collection::vec(prop::collection::vec(-50.0f64..50.0, 2), 4..30),
        k in 1usize..4,
        extra_rounds in 1i64..5,
    ) {
        let store = store_from(&points);
        let mut centroids: Vec<[f64; 2]> = store.iter().take(k).map(|r| r.coords).collect();

        // Alternate the two steps until consecutive partitions agree.
        let mut partition = assign(&centroids, &store);
        let mut stable = false;
        for _ in 0..200 {
            centroids = update(&partition, &store);
            let next = assign(&centroids, &store);
            if next == partition {
                stable = true;
                break;
            }
            partition = next;
        }
        prop_assume!(stable);

        prop_assert_eq!(&assign(&centroids, &store), &partition);

        let fit = Kmeans::new(k)
            .with_iterations(extra_rounds)
            .fit_with(&store, &mut FixedCentroids::new(centroids.clone()))
            .unwrap();
        prop_assert_eq!(&fit.clusters, &partition);
        prop_assert_eq!(&fit.centroids, &centroids);
    }
}
