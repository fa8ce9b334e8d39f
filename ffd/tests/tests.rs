#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use ffd::io;
    use volpack::io::{export, import};
    use volpack::packer::SortPolicy;
    use volpack::util::assertions;

    #[test_case("../assets/demo.json"; "demo")]
    #[test_case("../assets/mixed.json"; "mixed")]
    #[test_case("../assets/oversize.json"; "oversize")]
    fn pack_instance(instance_path: &str) {
        let instance = io::read_instance(Path::new(instance_path)).unwrap();
        let mut packer = import(&instance, SortPolicy::default()).unwrap();
        packer.pack().unwrap();

        let bins = packer.bins().unwrap();
        assert!(bins.iter().all(assertions::bin_is_feasible));

        let unfit_ids: Vec<usize> = packer.unfit_items().unwrap().iter().map(|i| i.id).collect();
        assert!(assertions::solution_is_partition(
            packer.items().unwrap().len(),
            bins,
            &unfit_ids
        ));

        // exporting must preserve every item exactly once as well
        let solution = export(&packer, &instance).unwrap();
        let n_placed: usize = solution.bins.iter().map(|b| b.placed.len()).sum();
        assert_eq!(
            n_placed + solution.unfit.len(),
            packer.items().unwrap().len()
        );
    }

    #[test]
    fn demo_instance_packs_twelve_of_twenty() {
        let instance = io::read_instance(Path::new("../assets/demo.json")).unwrap();
        let mut packer = import(&instance, SortPolicy::default()).unwrap();
        packer.pack().unwrap();

        let bins = packer.bins().unwrap();
        assert_eq!(bins[0].placed_items.len(), 12);
        assert_eq!(packer.unfit_items().unwrap().len(), 8);
    }

    #[test]
    fn oversize_instance_rejects_the_boulder_without_error() {
        let instance = io::read_instance(Path::new("../assets/oversize.json")).unwrap();
        let mut packer = import(&instance, SortPolicy::default()).unwrap();
        packer.pack().unwrap();

        let solution = export(&packer, &instance).unwrap();
        assert_eq!(solution.unfit, vec!["boulder".to_string()]);
        assert_eq!(solution.bins[0].placed.len(), 2);
    }

    #[test]
    fn two_runs_over_the_same_instance_are_identical() {
        let instance = io::read_instance(Path::new("../assets/mixed.json")).unwrap();
        let solve = || {
            let mut packer = import(&instance, SortPolicy::default()).unwrap();
            packer.pack().unwrap();
            serde_json::to_string(&export(&packer, &instance).unwrap()).unwrap()
        };
        assert_eq!(solve(), solve());
    }
}
