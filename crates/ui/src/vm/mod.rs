mod quiz_vm;

pub use quiz_vm::{
    DialogAction, DialogVm, FlagVm, QuizIntent, QuizScreenVm, QuizVm, flag_image_src,
};
