#[cfg(test)]
mod tests {
    use std::time::Duration;

    use circ_pack::entities::{
        BoundingRegion, Instance, Item, Layout, NestedItem, NestedLayout, PlacementMode,
    };
    use circ_pack::geometry::primitives::Point;
    use circ_pack::io::export::export_solution;
    use circ_pack::io::ext_repr::ExtInstance;
    use circ_pack::io::import::{expanded_ext_ids, import_instance};
    use circ_pack::io::svg::Color;
    use circ_pack::util::assertions;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn parse(json: &str) -> ExtInstance {
        serde_json::from_str(json).unwrap()
    }

    const CONDUIT: &str = r#"{
        "name": "conduit",
        "container": { "radius": 20.0 },
        "items": [
            { "id": 7, "demand": 2, "radius": 4.0, "conductors": { "count": 3, "radius": 1.0 } },
            { "id": 9, "area": 12.566370614359172, "group": 5 },
            { "id": 3, "demand": 3, "radius": 2.5, "conductors": { "count": 2 } }
        ]
    }"#;

    #[test]
    fn demand_is_expanded_into_sequential_items() {
        let ext_instance = parse(CONDUIT);
        assert!(!ext_instance.permit_overlap);

        let instance = import_instance(&ext_instance).unwrap();
        assert_eq!(instance.total_item_qty(), 6);
        assert_eq!(expanded_ext_ids(&ext_instance), vec![7, 7, 9, 3, 3, 3]);

        let ids = instance.items().iter().map(|i| i.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);

        // groups default to the position of the external item
        let groups = instance.items().iter().map(|i| i.group).collect::<Vec<_>>();
        assert_eq!(groups, vec![Some(0), Some(0), Some(5), Some(2), Some(2), Some(2)]);

        assert_eq!(instance.item(0).nested, vec![NestedItem::new(1.0); 3]);
        assert_eq!(instance.item(3).nested, vec![NestedItem::unspecified(); 2]);
        assert!(!instance.item(2).has_nested());
    }

    #[test]
    fn areas_are_converted_to_radii() {
        let ext_instance = parse(
            r#"{
                "name": "by_area",
                "container": { "area": 314.1592653589793 },
                "items": [ { "id": 1, "area": 12.566370614359172 } ]
            }"#,
        );
        let instance = import_instance(&ext_instance).unwrap();
        assert!(approx_eq!(f64, instance.region.radius, 10.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, instance.item(0).radius, 2.0, epsilon = 1e-9));
    }

    #[test]
    fn item_size_is_approximated_by_its_conductors() {
        let ext_instance = parse(
            r#"{
                "name": "conductors_only",
                "container": { "radius": 10.0 },
                "items": [ { "id": 1, "conductors": { "count": 4, "area": 3.141592653589793 } } ]
            }"#,
        );
        let instance = import_instance(&ext_instance).unwrap();
        // four conductors of area pi -> item area 4 pi -> radius 2
        assert!(approx_eq!(f64, instance.item(0).radius, 2.0, epsilon = 1e-9));
        assert!(approx_eq!(
            f64,
            instance.item(0).nested[0].radius.unwrap(),
            1.0,
            epsilon = 1e-9
        ));
    }

    #[test]
    fn non_positive_item_sizes_are_accepted_for_dropping() {
        let ext_instance = parse(
            r#"{
                "name": "degenerate",
                "container": { "radius": 10.0 },
                "items": [ { "id": 1, "radius": 0.0 }, { "id": 2, "area": -5.0 } ]
            }"#,
        );
        let instance = import_instance(&ext_instance).unwrap();
        assert_eq!(instance.item(0).radius, 0.0);
        assert_eq!(instance.item(1).radius, 0.0);
        assert!(!instance.region.admits(instance.item(0).radius));
    }

    #[test_case(r#"{ "name": "a", "container": {}, "items": [ { "id": 1, "radius": 1.0 } ] }"#; "container_without_size")]
    #[test_case(r#"{ "name": "b", "container": { "radius": 0.0 }, "items": [ { "id": 1, "radius": 1.0 } ] }"#; "zero_container")]
    #[test_case(r#"{ "name": "c", "container": { "area": -1.0 }, "items": [ { "id": 1, "radius": 1.0 } ] }"#; "negative_container_area")]
    #[test_case(r#"{ "name": "d", "container": { "radius": 5.0 }, "items": [] }"#; "no_items")]
    #[test_case(r#"{ "name": "e", "container": { "radius": 5.0 }, "items": [ { "id": 1 } ] }"#; "item_without_size")]
    #[test_case(r#"{ "name": "f", "container": { "radius": 5.0 }, "items": [ { "id": 1, "demand": 0, "radius": 1.0 } ] }"#; "zero_demand")]
    fn invalid_instances_are_rejected(json: &str) {
        let ext_instance = parse(json);
        assert!(import_instance(&ext_instance).is_err());
    }

    #[test]
    fn export_refers_to_external_ids() {
        let ext_instance = parse(CONDUIT);
        let instance = import_instance(&ext_instance).unwrap();

        let mut layout = Layout::new(instance.region);
        layout.place_item(instance.item(0), Point(-5.0, 0.0));
        layout.place_item(instance.item(3), Point(5.0, 0.0));
        layout.placed_items[0].nested = Some(NestedLayout {
            result: Layout::new(BoundingRegion::new(Point(-5.0, 0.0), 3.4).unwrap()).save(
                vec![0, 1, 2],
                vec![],
                PlacementMode::NonOverlapping,
            ),
            n_requested: 3,
            n_attempts: 15,
            scale: 0.9_f64.powi(14),
        });
        let result = layout.save(vec![1, 2, 4, 5], vec![], PlacementMode::NonOverlapping);
        assert!(assertions::result_is_valid(&result));

        let solution = export_solution(&ext_instance, &result, Duration::from_millis(42));
        assert_eq!(solution.run_time_ms, 42);
        assert_eq!(solution.placed_items[0].item_id, 7);
        assert_eq!(solution.placed_items[0].copy_index, 0);
        assert_eq!(solution.placed_items[1].item_id, 3);
        assert_eq!(solution.placed_items[1].copy_index, 3);
        assert_eq!(solution.unplaced, vec![7, 9, 3, 3]);
        assert!(approx_eq!(f64, solution.max_extent, 9.0, epsilon = 1e-9));

        let conductors = solution.placed_items[0].conductors.as_ref().unwrap();
        assert!(!conductors.complete);
        assert_eq!(conductors.requested, 3);
        assert!(conductors.placed.is_empty());
        assert!(solution.placed_items[1].conductors.is_none());

        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(json["mode"], "non_overlapping");
    }

    #[test]
    fn instance_requires_sequential_ids() {
        let region = BoundingRegion::centered(10.0).unwrap();
        let items = vec![Item::new(0, 1.0), Item::new(2, 1.0)];
        assert!(Instance::new(region, items).is_err());
    }

    #[test_case("#1A2B3C", Some(Color(0x1A, 0x2B, 0x3C)); "with_hash")]
    #[test_case("ff0000", Some(Color(0xFF, 0x00, 0x00)); "without_hash")]
    #[test_case("#12345", None; "too_short")]
    #[test_case("#GG0000", None; "not_hex")]
    #[test_case("a\u{e9}123", None; "multibyte_character")]
    #[test_case("#\u{e9}\u{e9}\u{e9}", None; "only_multibyte_characters")]
    fn colors_are_parsed_from_hex(s: &str, expected: Option<Color>) {
        assert_eq!(Color::try_from(s).ok(), expected);
        let json = serde_json::to_string(s).unwrap();
        assert_eq!(serde_json::from_str::<Color>(&json).ok(), expected);
    }
}
