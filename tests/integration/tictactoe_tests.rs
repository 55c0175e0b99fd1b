use super::{click, latest_text, TestDriver};
use oxide_apps::apps::tictactoe::{
    self, GameStatus, Mark, TicTacToeEvent, TicTacToeLogic, TicTacToeModel, Win,
};
use oxide_apps::{MvuRuntime, Node, TestRenderer};

fn start_game() -> (
    TestDriver<TicTacToeEvent, TicTacToeModel, TicTacToeLogic>,
    TestRenderer<Node>,
) {
    let renderer = TestRenderer::new();
    let driver = MvuRuntime::new(TicTacToeModel::default(), TicTacToeLogic, renderer.clone()).run();
    (driver, renderer)
}

fn play_cells(
    driver: &mut TestDriver<TicTacToeEvent, TicTacToeModel, TicTacToeLogic>,
    renders: &TestRenderer<Node>,
    cells: &[usize],
) {
    for cell in cells {
        click(renders, &format!("cell-{cell}"));
        driver.process_events();
    }
}

#[test]
fn given_a_new_game_should_show_empty_board_with_x_to_move() {
    let (driver, renders) = start_game();

    assert_eq!(*driver.get(&TicTacToeModel::BOARD), [None; 9]);
    assert_eq!(latest_text(&renders, "status"), "Next player: X");
    renders.with_latest(|tree| {
        let cells = tree.find_all(|e| e.has_class("square"));
        assert_eq!(cells.len(), 9);
        assert!(cells.iter().all(|c| !c.is_set("disabled")));
        let keys: Vec<_> = cells.iter().filter_map(|c| c.get_key()).collect();
        assert_eq!(keys, (0..9).collect::<Vec<u64>>());
    });
}

#[test]
fn given_a_move_should_mark_cell_and_hand_turn_to_o() {
    let (mut driver, renders) = start_game();

    play_cells(&mut driver, &renders, &[4]);

    assert_eq!(driver.model().board[4], Some(Mark::X));
    assert!(!*driver.get(&TicTacToeModel::X_IS_NEXT));
    assert_eq!(latest_text(&renders, "cell-4"), "X");
    assert_eq!(latest_text(&renders, "status"), "Next player: O");
    renders.with_latest(|tree| {
        assert!(tree.find_by_id("cell-4").unwrap().is_set("disabled"));
    });
}

#[test]
fn given_an_occupied_cell_when_clicked_should_leave_state_unchanged() {
    let (mut driver, renders) = start_game();
    play_cells(&mut driver, &renders, &[4]);
    let before = driver.model().clone();

    play_cells(&mut driver, &renders, &[4]);

    assert_eq!(*driver.model(), before);
}

#[test]
fn given_top_row_completed_by_x_should_declare_x_winner_and_highlight_line() {
    let (mut driver, renders) = start_game();

    play_cells(&mut driver, &renders, &[0, 3, 1, 4, 2]);

    assert_eq!(*driver.get(&TicTacToeModel::WINNER), Some(Mark::X));
    assert_eq!(
        driver.model().status(),
        GameStatus::Won(Win {
            mark: Mark::X,
            line: [0, 1, 2]
        })
    );
    assert_eq!(latest_text(&renders, "status"), "🎉 Winner: X!");
    renders.with_latest(|tree| {
        let winning: Vec<_> = tree
            .find_all(|e| e.has_class("winning"))
            .iter()
            .filter_map(|e| e.get_id().map(str::to_string))
            .collect();
        assert_eq!(winning, vec!["cell-0", "cell-1", "cell-2"]);
        assert!(tree.find_by_id("status").unwrap().has_class("winner"));
        // Empty cells lock once the game is decided.
        assert!(tree.find_by_id("cell-8").unwrap().is_set("disabled"));
    });
}

#[test]
fn given_x_x_on_top_row_and_o_o_in_the_middle_when_x_plays_2_should_win_top_row() {
    let (mut driver, renders) = start_game();

    play_cells(&mut driver, &renders, &[0, 4, 1, 5]);
    assert_eq!(
        driver.model().board,
        [
            Some(Mark::X),
            Some(Mark::X),
            None,
            None,
            Some(Mark::O),
            Some(Mark::O),
            None,
            None,
            None,
        ]
    );
    assert!(driver.model().x_is_next);

    play_cells(&mut driver, &renders, &[2]);

    let model = driver.model();
    assert_eq!(model.winner, Some(Mark::X));
    assert_eq!(
        tictactoe::calculate_winner(&model.board),
        Some(Win {
            mark: Mark::X,
            line: [0, 1, 2]
        })
    );
    assert!(matches!(model.status(), GameStatus::Won(win) if win.line == [0, 1, 2]));
}

#[test]
fn given_a_won_game_when_another_cell_clicked_should_not_change_board() {
    let (mut driver, renders) = start_game();
    play_cells(&mut driver, &renders, &[0, 3, 1, 4, 2]);
    let board = *driver.get(&TicTacToeModel::BOARD);

    play_cells(&mut driver, &renders, &[5]);

    assert_eq!(*driver.get(&TicTacToeModel::BOARD), board);
    assert_eq!(driver.model().winner, Some(Mark::X));
}

#[test]
fn given_a_full_board_without_a_line_should_be_a_draw() {
    let (mut driver, renders) = start_game();

    // X: 0 2 3 7 8, O: 1 4 5 6
    play_cells(&mut driver, &renders, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let model = driver.model();
    assert!(model.is_full());
    assert!(model.is_draw());
    assert_eq!(model.winner, None);
    assert_eq!(model.status(), GameStatus::Drawn);
    assert_eq!(latest_text(&renders, "status"), "🤝 It's a Draw!");
    renders.with_latest(|tree| {
        assert!(tree.find_by_id("status").unwrap().has_class("draw"));
        assert!(tree.find(|e| e.has_class("winning")).is_none());
    });
}

#[test]
fn given_a_finished_game_when_new_game_clicked_should_restore_initial_state() {
    let (mut driver, renders) = start_game();
    play_cells(&mut driver, &renders, &[0, 3, 1, 4, 2]);

    click(&renders, "new-game");
    driver.process_events();

    assert_eq!(*driver.model(), TicTacToeModel::default());
    assert_eq!(latest_text(&renders, "status"), "Next player: X");
}

#[test]
fn given_an_off_board_index_should_ignore_the_move() {
    let (mut driver, _renders) = start_game();

    driver.dispatch(TicTacToeEvent::Play(9));

    assert_eq!(*driver.model(), TicTacToeModel::default());
}

#[test]
fn calculate_winner_reports_first_line_in_scan_order() {
    let mut board = [None; 9];
    for cell in [0, 1, 2, 3, 6] {
        board[cell] = Some(Mark::O);
    }

    // Both the top row and the left column are complete; rows are scanned first.
    assert_eq!(
        tictactoe::calculate_winner(&board),
        Some(Win {
            mark: Mark::O,
            line: [0, 1, 2]
        })
    );
    assert_eq!(tictactoe::calculate_winner(&[None; 9]), None);
}

#[test]
fn given_a_drawn_game_when_new_game_clicked_should_restore_initial_state() {
    let (mut driver, renders) = start_game();
    play_cells(&mut driver, &renders, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(driver.model().is_draw());

    click(&renders, "new-game");
    driver.process_events();

    assert_eq!(*driver.model(), TicTacToeModel::default());
    assert_eq!(latest_text(&renders, "status"), "Next player: X");
}

#[test]
fn given_o_to_move_mid_game_when_new_game_clicked_should_restore_initial_state() {
    let (mut driver, renders) = start_game();
    play_cells(&mut driver, &renders, &[4, 0, 8]);
    assert!(!*driver.get(&TicTacToeModel::X_IS_NEXT));

    click(&renders, "new-game");
    driver.process_events();

    assert_eq!(*driver.get(&TicTacToeModel::BOARD), [None; 9]);
    assert!(*driver.get(&TicTacToeModel::X_IS_NEXT));
    assert_eq!(*driver.get(&TicTacToeModel::WINNER), None);
    assert_eq!(latest_text(&renders, "status"), "Next player: X");
    renders.with_latest(|tree| {
        assert!(tree
            .find_all(|e| e.has_class("square"))
            .iter()
            .all(|c| c.text_content().is_empty() && !c.is_set("disabled")));
    });
}

#[test]
fn given_a_winner_slot_seeded_over_an_open_board_should_keep_status_from_the_board() {
    let renderer = TestRenderer::new();
    let driver = MvuRuntime::new(TicTacToeModel::default(), TicTacToeLogic, renderer.clone())
        .with_slot(&TicTacToeModel::WINNER, Some(Mark::O))
        .run();

    assert!(!driver.model().is_draw());
    assert_eq!(
        driver.model().status(),
        GameStatus::InProgress { next: Mark::X }
    );
    assert_eq!(latest_text(&renderer, "status"), "Next player: X");
}
