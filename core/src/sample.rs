/// Game analysed when no moves are given on the command line.
pub const SAMPLE_GAME: &[&str] = &[
    "b3", "e5", "Bb2", "Nc6", "d4", "d6", "dxe5", "dxe5", "Qxd8+", "Nxd8", "Bxe5", "Nc6", "Bxc7",
    "Nf6", "e3", "Bb4+", "c3", "Bc5", "Bb5", "Bd7", "Nf3", "a6", "Bxc6", "Bxc6", "Ne5", "Rc8",
    "Nxc6", "Rxc7", "Nb4", "Bxb4", "cxb4", "Rc1+", "Ke2", "Rxh1", "h3", "O-O", "a3", "Nd5", "Kd2",
    "Rg1", "g4", "Rf1", "f4", "Rd8", "Ke2", "Rh1", "e4", "Nc3+", "Nxc3", "Rxa1", "Ke3", "Rxa3",
    "Ne2", "Rxb3+", "Kf2", "Rxb4", "e5", "Rd2", "Ke1", "Rbb2", "Nd4", "Rxd4",
];
