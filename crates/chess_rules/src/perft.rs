use crate::{board::Board, legal::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        let mover = board.side_to_move();
        legal_moves_into(board, mover, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = board.apply(mv);
            nodes += inner(board, depth - 1, rest);
            board.undo(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(board, depth, &mut layers[..])
}

/// Perft split by root move, in generation order.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut moves = Vec::with_capacity(64);
    let mover = board.side_to_move();
    legal_moves_into(board, mover, &mut moves);

    moves
        .into_iter()
        .map(|mv| {
            let undo = board.apply(mv);
            let nodes = perft(board, depth - 1);
            board.undo(mv, undo);
            (mv, nodes)
        })
        .collect()
}
