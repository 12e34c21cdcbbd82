use crate::World;
use std::fmt;

/// Renders the world as `xbase` lines of `xbase` three-character symbols,
/// each line terminated by `'\n'`.
pub fn format_world(world: &World) -> String {
    let xbase = world.xbase();
    let mut out = String::with_capacity(world.len() * 3 + xbase);
    for row in world.cells().chunks(xbase) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_world(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_alive_center() {
        let world = World::new(3).unwrap().set_alive(4).unwrap();
        assert_eq!(format_world(&world), " o  o  o \n o  x  o \n o  o  o \n");
        assert_eq!(world.to_string(), format_world(&world));
    }

    #[test]
    fn one_line_per_row() {
        let world = World::from_alive(6, [0, 35]).unwrap();
        let text = format_world(&world);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.len() == 18));
        assert!(lines[0].starts_with(" x "));
        assert!(lines[5].ends_with(" x "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn single_cell_world() {
        assert_eq!(format_world(&World::new(1).unwrap()), " o \n");
    }
}
