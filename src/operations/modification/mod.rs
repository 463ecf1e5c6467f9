mod split;

pub use split::SplitSpline;
