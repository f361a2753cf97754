use alloc::string::ToString;

use crate::*;

/// Full repaint of `board` onto `surface`. Reads the board only.
pub fn render_board<S: Surface + ?Sized>(board: &Board, cell_size: u32, surface: &mut S) {
    let size = cell_size as f64;
    surface.clear();

    for ((x, y), cell) in board.iter() {
        let left = x as f64 * size;
        let top = y as f64 * size;
        let rect = Rect::new(left, top, size, size);

        surface.stroke_rect(rect, Color::Grid);

        if !cell.is_revealed() {
            draw_bevel(surface, left, top, size);
        } else if cell.is_mine() {
            surface.fill_rect(rect, Color::Mine);
        } else {
            surface.fill_rect(rect, Color::Open);
            let count = cell.neighbor_mine_count();
            if count > 0 {
                surface.fill_text(&count.to_string(), rect.center(), Color::Label);
            }
        }

        if cell.is_flagged() {
            draw_flag(surface, left, top, size);
        }
    }
}

fn draw_bevel<S: Surface + ?Sized>(surface: &mut S, left: f64, top: f64, size: f64) {
    let bevel = size / 10.0;
    let right = left + size;
    let bottom = top + size;

    surface.stroke_polyline(
        &[
            Point::new(left + bevel, bottom),
            Point::new(left + bevel, top + bevel),
            Point::new(right, top + bevel),
        ],
        Color::BevelLight,
    );
    surface.stroke_polyline(
        &[
            Point::new(right, top + bevel),
            Point::new(right, bottom - bevel),
            Point::new(left + bevel, bottom - bevel),
        ],
        Color::BevelShadow,
    );
}

fn draw_flag<S: Surface + ?Sized>(surface: &mut S, left: f64, top: f64, size: f64) {
    let pole_x = left + size / 2.0;
    let pole_top = top + size / 4.0;

    surface.fill_rect(
        Rect::new(pole_x, pole_top, size / 10.0, size / 2.0),
        Color::FlagPole,
    );
    surface.fill_polygon(
        &[
            Point::new(pole_x, pole_top),
            Point::new(pole_x, top + size / 2.0),
            Point::new(pole_x + size / 4.0, pole_top + size / 8.0),
        ],
        Color::Flag,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn rendered(board: &Board, cell_size: u32) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        render_board(board, cell_size, &mut surface);
        surface
    }

    fn is_bevel(op: &DrawOp) -> bool {
        matches!(
            op,
            DrawOp::StrokePolyline(_, Color::BevelLight | Color::BevelShadow)
        )
    }

    #[test]
    fn hidden_board_draws_borders_and_bevels_only() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        let surface = rendered(&board, 40);

        assert_eq!(surface.ops()[0], DrawOp::Clear);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::StrokeRect(..))), 9);
        assert_eq!(surface.count(is_bevel), 18);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::FillRect(..))), 0);
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn bevel_thickness_is_a_tenth_of_the_cell() {
        let board = Board::from_mine_coords((1, 1), &[]).unwrap();
        let surface = rendered(&board, 40);

        let light = surface
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::StrokePolyline(points, Color::BevelLight) => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            light,
            [Point::new(4.0, 40.0), Point::new(4.0, 4.0), Point::new(40.0, 4.0)]
        );
    }

    #[test]
    fn revealed_cells_are_filled_and_labelled() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        board[(1, 1)].reveal();
        board[(0, 0)].reveal();
        let surface = rendered(&board, 40);

        assert!(surface
            .ops()
            .contains(&DrawOp::FillRect(Rect::new(0.0, 0.0, 40.0, 40.0), Color::Mine)));
        assert!(surface
            .ops()
            .contains(&DrawOp::FillRect(Rect::new(40.0, 40.0, 40.0, 40.0), Color::Open)));
        assert_eq!(
            surface.texts().collect::<Vec<_>>(),
            [("1", Point::new(60.0, 60.0))]
        );
        assert_eq!(surface.count(is_bevel), 4);
    }

    #[test]
    fn zero_count_cells_get_no_label() {
        let mut board = Board::from_mine_coords((2, 2), &[]).unwrap();
        board[(0, 0)].reveal();
        let surface = rendered(&board, 40);
        assert_eq!(surface.texts().count(), 0);
    }

    #[test]
    fn flagged_cell_draws_pole_and_flag() {
        let mut board = Board::from_mine_coords((2, 2), &[]).unwrap();
        board[(1, 0)].toggle_flag();
        let surface = rendered(&board, 40);

        assert!(surface.ops().contains(&DrawOp::FillRect(
            Rect::new(60.0, 10.0, 4.0, 20.0),
            Color::FlagPole
        )));
        assert!(surface.ops().contains(&DrawOp::FillPolygon(
            [Point::new(60.0, 10.0), Point::new(60.0, 20.0), Point::new(70.0, 15.0)].to_vec(),
            Color::Flag
        )));
    }

    #[test]
    fn rendering_twice_gives_the_same_frame() {
        let mut board = Board::from_mine_coords((4, 4), &[(0, 3), (2, 2)]).unwrap();
        board[(1, 2)].reveal();
        board[(3, 0)].toggle_flag();

        let mut surface = RecordingSurface::new();
        render_board(&board, 32, &mut surface);
        let first = surface.ops().to_vec();
        render_board(&board, 32, &mut surface);

        assert_eq!(surface.ops(), first.as_slice());
        assert_eq!(surface.frames(), 2);
    }
}
