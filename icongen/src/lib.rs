pub mod mipmap;
