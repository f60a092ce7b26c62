#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, heading: Heading) -> Self {
        match heading {
            Heading::Up => Self::new(self.x, self.y - 1),
            Heading::Down => Self::new(self.x, self.y + 1),
            Heading::Left => Self::new(self.x - 1, self.y),
            Heading::Right => Self::new(self.x + 1, self.y),
        }
    }

    pub fn in_bounds(self, board_size: usize) -> bool {
        let size = board_size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn opposite(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let p = Point::new(5, 5);
        assert_eq!(p.step(Heading::Up), Point::new(5, 4));
        assert_eq!(p.step(Heading::Down), Point::new(5, 6));
        assert_eq!(p.step(Heading::Left), Point::new(4, 5));
        assert_eq!(p.step(Heading::Right), Point::new(6, 5));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Point::new(0, 0).in_bounds(10));
        assert!(Point::new(9, 9).in_bounds(10));
        assert!(!Point::new(10, 0).in_bounds(10));
        assert!(!Point::new(0, 10).in_bounds(10));
        assert!(!Point::new(-1, 5).in_bounds(10));
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Heading::Up.opposite(), Heading::Down);
        assert_eq!(Heading::Down.opposite(), Heading::Up);
        assert_eq!(Heading::Left.opposite(), Heading::Right);
        assert_eq!(Heading::Right.opposite(), Heading::Left);
    }
}
