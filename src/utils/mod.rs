mod maths_utils;

pub(crate) use maths_utils::{interp_clamped, quantile_of, running_max};
