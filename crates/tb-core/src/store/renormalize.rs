use crate::completion::derive_completed;
use crate::models::{board::Board, task::Task};

/// Walk every column of `board`, order its tasks by their current position
/// and rewrite positions to `0..n`, re-deriving `completed` on the way.
/// Tasks of other boards are left alone.
pub(crate) fn renormalize_board(board: &Board, tasks: &mut [Task]) {
    for column in &board.columns {
        let mut group: Vec<usize> = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.board_id == board.id && t.status == column.id)
            .map(|(i, _)| i)
            .collect();
        group.sort_by_key(|&i| tasks[i].position);

        for (rank, index) in group.into_iter().enumerate() {
            let task = &mut tasks[index];
            task.position = rank as u32;
            task.completed = derive_completed(column, task.completed);
        }
    }
}
