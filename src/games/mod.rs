pub mod qubic;
