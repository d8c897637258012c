#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use crate::analyzer::{AnalysisFailure, GridAnalyzer};
    use crate::builder::{BuilderInvalidReason, GridBuilder};
    use crate::cell::Cell;
    use crate::grid::Grid;
    use crate::location::Location;
    use crate::network::WireNetwork;
    use crate::parse::{parse_grid, InputError};
    use crate::shape::{Axis, SquareStep};

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    // a wire running right under a metal column, then back left over it
    const SINGLE_WRAP: [&str; 3] = [
        "CCMCC",
        "..M.C",
        ".CCCC",
    ];

    #[test]
    fn classification_is_stable() {
        let board = grid(&SINGLE_WRAP);
        let first = board.classify();
        let second = board.classify();

        assert_eq!(first, second);
        assert_eq!(first.metal_rows, vec![0]);
        assert_eq!(first.metal_columns, vec![2, 4]);
    }

    #[test]
    fn junction_on_metal_column_needs_both_sides() {
        let both = grid(&["CMC", "CM.", ".MC"]);
        let classification = both.classify();
        assert_eq!(classification.metal_columns, vec![1]);
        assert_eq!(classification.junction_locations(), vec![Location(0, 1)]);

        let left_only = grid(&[".M.", "CM.", ".M."]);
        assert!(left_only.classify().junction_locations().is_empty());

        let right_only = grid(&[".M.", ".MC", ".M."]);
        assert!(right_only.classify().junction_locations().is_empty());
    }

    #[test]
    fn junction_on_metal_row_needs_both_sides() {
        // column 1 is metal too, but its flanks are empty so only the row rule applies
        let both = grid(&[".C.", "MMM", ".C."]);
        let classification = both.classify();
        assert_eq!(classification.metal_rows, vec![1]);
        assert_eq!(classification.metal_columns, vec![1]);
        assert_eq!(classification.junction_locations(), vec![Location(1, 1)]);

        let above_only = grid(&[".C.", "MMM", "..."]);
        assert!(above_only.classify().junction_locations().is_empty());

        let below_only = grid(&["...", "MMM", ".C."]);
        assert!(below_only.classify().junction_locations().is_empty());
    }

    #[test]
    fn edge_columns_never_hold_junctions() {
        let board = grid(&["MCM", "M.M", "MCM"]);
        let classification = board.classify();

        assert_eq!(classification.metal_columns, vec![0, 2]);
        assert!(classification.junction_locations().is_empty());
    }

    #[test]
    fn wire_network_includes_metal_junctions() {
        let board = grid(&SINGLE_WRAP);
        let classification = board.classify();

        assert_eq!(classification.junction_locations(), vec![Location(0, 2), Location(2, 2)]);
        assert!(classification.wire_network[(0, 2)]);
        assert!(!classification.wire_network[(1, 2)]);
        assert_eq!(board.render_network(&classification), "CC+CC
....C
.C+CC
");
    }

    #[test]
    fn neighbors_come_up_right_down_left() {
        let board = grid(&[".C.", "CCC", ".C."]);
        let network = WireNetwork::from_mask(&board.classify().wire_network);

        assert_eq!(network.neighbors(Location(1, 1)).collect::<Vec<_>>(), vec![
            Location(0, 1),
            Location(1, 2),
            Location(2, 1),
            Location(1, 0),
        ]);
        assert_eq!(network.step_between(Location(1, 1), Location(1, 0)), Some(SquareStep::Left));
        assert_eq!(network.degree(Location(0, 0)), 0);
        // (0, 1) is the first dead end in row-major order
        assert_eq!(network.start(), Some(Location(0, 1)));
    }

    #[test]
    fn straight_wire_without_junctions() {
        let analysis = GridAnalyzer::from(&grid(&["CCC", "..."])).analyze().unwrap();

        assert!(analysis.junctions.is_empty());
        assert_eq!(analysis.path, vec![Location(0, 0), Location(0, 1), Location(0, 2)]);
        assert_eq!(analysis.answer, 0);
    }

    #[test]
    fn single_crossing_is_not_a_wrap() {
        let analysis = GridAnalyzer::from(&grid(&["CCC", ".C.", "CCC"])).analyze().unwrap();

        assert_eq!(analysis.metal_rows, vec![0, 2]);
        assert_eq!(analysis.metal_columns, vec![1]);
        assert_eq!(analysis.start, Location(0, 0));
        assert_eq!(analysis.path.len(), 3);
        assert_eq!(analysis.column_tallies, vec![(1, 1)]);
        assert_eq!(analysis.answer, 0);
    }

    #[test]
    fn single_wrap_around_metal_column() {
        let analysis = GridAnalyzer::from(&grid(&SINGLE_WRAP)).analyze().unwrap();

        assert_eq!(analysis.path.len(), 10);
        assert_eq!(analysis.path.last(), Some(&Location(2, 1)));
        assert_eq!(analysis.column_tallies, vec![(2, -2), (4, 0)]);
        assert_eq!(analysis.row_tallies, vec![(0, 0)]);
        assert_eq!(analysis.wraps(Axis::Column, 2), Some(1));
        assert_eq!(analysis.wraps(Axis::Column, 1), None);
        assert_eq!(analysis.answer, 1);
    }

    #[test]
    fn single_wrap_around_metal_row() {
        // SINGLE_WRAP transposed
        let analysis = GridAnalyzer::from(&grid(&["C..", "C.C", "MMC", "C.C", "CCC"])).analyze().unwrap();

        assert_eq!(analysis.metal_rows, vec![2, 4]);
        assert_eq!(analysis.junctions, vec![Location(2, 0), Location(2, 2)]);
        assert_eq!(analysis.row_tallies, vec![(2, -2), (4, 0)]);
        assert_eq!(analysis.wraps(Axis::Row, 2), Some(1));
        assert_eq!(analysis.answer, 1);
    }

    #[test]
    fn double_wrap_around_metal_column() {
        let board = grid(&[
            "CCMCC",
            "..M.C",
            "CCCCC",
            "C.M..",
            "CCMCC",
            "..M.C",
            ".CCCC",
        ]);
        let analysis = GridAnalyzer::from(&board).analyze().unwrap();

        assert_eq!(analysis.path.len(), 22);
        assert_eq!(analysis.junctions.len(), 4);
        assert_eq!(analysis.column_tallies, vec![(2, -4)]);
        assert_eq!(analysis.answer, 2);
    }

    #[test]
    fn closed_loop_has_no_start() {
        let g = grid(&["CCC", "C.C", "CCC"]);
        let analyzer = GridAnalyzer::from(&g);
        assert_eq!(analyzer.analyze(), Err(AnalysisFailure::NoStartFound));
    }

    #[test]
    fn lone_empty_cell_has_no_start() {
        let board = parse_grid("1 1\n.\n").unwrap();
        let analyzer = GridAnalyzer::from(&board);

        assert_eq!(analyzer.network().node_count(), 0);
        assert_eq!(analyzer.analyze(), Err(AnalysisFailure::NoStartFound));
    }

    #[test]
    fn parse_skips_whitespace_between_cells() {
        let lines = parse_grid("3 5\nCCMCC\n..M.C\n.CCCC\n").unwrap();
        let joined = parse_grid("3 5 CCMCC ..M.C .CCCC").unwrap();
        let split = parse_grid("3\n5\nCC MCC..\nM.C .CC\nCC trailing").unwrap();

        assert_eq!(lines, joined);
        assert_eq!(lines, split);
        assert_eq!(format!("{}", lines), "CCMCC
..M.C
.CCCC
");
    }

    #[test]
    fn parse_rejects_bad_dimensions() {
        assert_eq!(parse_grid(""), Err(InputError::MissingDimension { name: "rows" }));
        assert_eq!(parse_grid("3"), Err(InputError::MissingDimension { name: "cols" }));
        assert_eq!(
            parse_grid("0 3"),
            Err(InputError::BadDimension { name: "rows", token: "0".to_string() })
        );
        assert_eq!(
            parse_grid("3 -1"),
            Err(InputError::BadDimension { name: "cols", token: "-1".to_string() })
        );
    }

    #[test]
    fn parse_rejects_truncated_grid() {
        assert_eq!(
            parse_grid("2 3\nCCC\nC"),
            Err(InputError::Truncated { expected: 6, found: 4 })
        );
    }

    #[test]
    fn crate_level_analyze() {
        assert_eq!(crate::analyze("3 5\nCCMCC\n..M.C\n.CCCC\n").unwrap().answer, 1);
        assert!(matches!(crate::analyze("2 2 C"), Err(crate::Error::InvalidInput(_))));
        assert_eq!(
            crate::analyze("1 1 ."),
            Err(crate::Error::Analysis(AnalysisFailure::NoStartFound))
        );
    }

    #[test]
    fn builder_fills_row_major() {
        let built = GridBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()))
            .push(Cell::Conductor)
            .push(Cell::Empty)
            .push(Cell::Metal('#'))
            .push(Cell::Conductor)
            .build()
            .unwrap();

        assert_eq!(built, grid(&["C.", "#C"]));
    }

    #[test]
    fn builder_reports_invalid_states() {
        let dims = (NonZero::new(2).unwrap(), NonZero::new(2).unwrap());

        let out_of_bounds = GridBuilder::with_dims(dims)
            .set(Location(2, 0), Cell::Conductor)
            .set(Location(0, 0), Cell::Conductor)
            .clone();
        assert_eq!(
            out_of_bounds.is_valid(),
            Some(&vec![BuilderInvalidReason::CellOutOfBounds { location: Location(2, 0) }])
        );

        let incomplete = GridBuilder::with_dims(dims).push(Cell::Conductor).build();
        assert_eq!(incomplete, Err(vec![BuilderInvalidReason::IncompleteGrid { missing: 3 }]));

        let mut overfull = GridBuilder::with_dims(dims);
        for _ in 0..5 {
            overfull.push(Cell::Empty);
        }
        assert_eq!(overfull.build(), Err(vec![BuilderInvalidReason::TooManyCells]));
    }

    #[test]
    fn from_rows_rejects_ragged_and_blank_rows() {
        assert_eq!(
            Grid::from_rows(&["CCC", "CC"]),
            Err(vec![BuilderInvalidReason::RaggedRow { row: 1, length: 2, expected: 3 }])
        );
        assert_eq!(
            Grid::from_rows(&["C C"]),
            Err(vec![BuilderInvalidReason::InvalidCharacter { location: Location(0, 1), character: ' ' }])
        );
        assert_eq!(Grid::from_rows::<&str>(&[]), Err(vec![BuilderInvalidReason::EmptyGrid]));
    }

    #[test]
    fn step_signs_and_bars() {
        assert_eq!(SquareStep::Right.sign(), 1);
        assert_eq!(SquareStep::Up.sign(), -1);
        assert_eq!(SquareStep::Left.crossed_bar(), Axis::Column);
        assert_eq!(SquareStep::Down.crossed_bar(), Axis::Row);
        assert_eq!(SquareStep::Down.invert(), SquareStep::Up);
        assert_eq!(SquareStep::direction_to(Location(1, 1), Location(0, 1)), Some(SquareStep::Up));
        assert_eq!(SquareStep::direction_to(Location(1, 1), Location(0, 0)), None);
    }
}
