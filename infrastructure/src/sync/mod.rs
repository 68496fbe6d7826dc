pub mod isolated;
