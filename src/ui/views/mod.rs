pub mod home;
pub mod not_found;
pub mod profile;
pub mod quiz;
pub mod result_detail;
pub mod results;
pub mod test_list;
