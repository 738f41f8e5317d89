pub mod shared_widget;
