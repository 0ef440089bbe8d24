pub mod entry_form;
pub mod entry_list;
pub mod wheel_host;
pub mod winner_banner;
