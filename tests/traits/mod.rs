pub mod outcome_iter;
pub mod result_ext;
