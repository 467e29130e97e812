pub mod math {
    pub mod curve {
        pub mod curve;
    }

    pub mod lookup {
        pub mod lookuptable1d;
        pub mod search;
    }
}

pub mod fixture {
    pub mod randomtable;
    pub mod caseassembler;
    pub mod casewriter;
}
