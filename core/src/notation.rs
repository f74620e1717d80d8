//! Output notation for a chosen move.
//!
//! A single step is written as one `E` line, e.g. `E c3 d4`. A capture chain
//! is written as one `J` line per jump, e.g. `J a1 c3` then `J c3 e5`. A chain
//! is cut short after the leg that reaches the mover's promotion row.
use crate::types::{Move, Side};

/// Formats `mv`, played by `side`, in `E`/`J` notation.
///
/// Jump lines each end with a newline; a single step line does not.
pub fn format_move(mv: &Move, side: Side) -> String {
    if !mv.is_capture() {
        return format!("E {} {}", mv.from(), mv.to());
    }

    let mut out = String::new();
    for leg in mv.legs() {
        out.push_str(&format!("J {} {}\n", leg.from, leg.to));
        if leg.to.row() == side.promotion_row() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(serials: &[u8]) -> Move {
        Move::from_serials(serials).unwrap()
    }

    #[test]
    fn test_simple_move() {
        // (5, 2) to (4, 3)
        assert_eq!(format_move(&mv(&[22, 18]), Side::White), "E c3 d4");
    }

    #[test]
    fn test_jump_chain() {
        assert_eq!(
            format_move(&mv(&[29, 22, 15]), Side::White),
            "J a1 c3\nJ c3 e5\n"
        );
    }

    #[test]
    fn test_chain_stops_at_promotion() {
        // (4, 1) -> (2, 3) -> (0, 5) -> (2, 7) would continue past the crown.
        let chain = mv(&[17, 10, 3, 12]);
        assert_eq!(
            format_move(&chain, Side::White),
            "J b4 d6\nJ d6 f8\n"
        );
        assert_eq!(
            format_move(&chain, Side::Black),
            "J b4 d6\nJ d6 f8\nJ f8 h6\n"
        );
    }
}
