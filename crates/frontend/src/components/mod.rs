pub mod board_view;
pub mod climb_list;
pub mod filter_panel;
