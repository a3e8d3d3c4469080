// src/gui/components/mod.rs
pub mod club_table;
pub mod controls;
pub mod map_view;
