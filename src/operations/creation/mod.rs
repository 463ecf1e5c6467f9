mod join;
mod make_boundary;
mod make_line;

pub use join::JoinBoundaries;
pub use make_boundary::MakeBoundary;
pub use make_line::MakeLine;
