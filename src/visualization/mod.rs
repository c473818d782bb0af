pub mod chain_vis2d;
