//! Intersects the two fixed segments (0,0)-(5,5) and (0,2)-(3,0) and prints
//! the classification message.

use seg2::{intersect, Segment};

fn main() {
    let s1 = Segment::from_coords(0.0, 0.0, 5.0, 5.0);
    let s2 = Segment::from_coords(0.0, 2.0, 3.0, 0.0);
    println!("{}", intersect(s1, s2));
}
