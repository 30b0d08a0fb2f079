pub mod agencies;
