#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{DialogAction, DialogVm, FlagVm, QuizIntent, QuizVm};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let reveal_delay = ctx.settings().reveal_delay();
    let vm = use_signal(move || QuizVm::new(ctx.new_quiz(), ctx.flags_dir()));

    let on_tap = use_callback(move |index: usize| {
        let mut vm = vm;
        if !vm.write().dispatch(QuizIntent::Tap(index)) {
            return;
        }
        if reveal_delay.is_zero() {
            vm.write().reveal();
            return;
        }
        // Pacing only; the quiz is already resolved.
        spawn(async move {
            tokio::time::sleep(reveal_delay).await;
            let mut vm = vm;
            vm.write().reveal();
        });
    });

    let on_dialog = use_callback(move |action: DialogAction| {
        let mut vm = vm;
        vm.write().dispatch(action.intent());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(on_tap, vm);
            }
        }
    }

    let screen = vm.read().screen();

    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-prompt-label", "Tap the flag of" }
            div { class: "quiz-prompt", "{screen.prompt}" }

            for flag in screen.flags.iter().cloned() {
                FlagButton { key: "{flag.index}", flag: flag.clone(), on_tap }
            }
        }

        div { class: "quiz-stats",
            p { "{screen.score_label}" }
            p { "{screen.question_label}" }
        }

        if let Some(dialog) = screen.dialog.clone() {
            ResultDialog { dialog, on_action: on_dialog }
        }
    }
}

#[component]
fn FlagButton(flag: FlagVm, on_tap: EventHandler<usize>) -> Element {
    let index = flag.index;
    let class = if flag.tapped {
        "flag tapped"
    } else if flag.dimmed {
        "flag dimmed"
    } else {
        "flag"
    };

    rsx! {
        button {
            class: "{class}",
            id: "flag-{index}",
            onclick: move |_| on_tap.call(index),
            img { src: "{flag.image_src}", alt: "{flag.name}" }
        }
    }
}

#[component]
fn ResultDialog(dialog: DialogVm, on_action: EventHandler<DialogAction>) -> Element {
    let action = dialog.action;
    let label = action.label();

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog",
                h3 { "{dialog.title}" }
                p { "{dialog.message}" }
                button {
                    id: "dialog-action",
                    onclick: move |_| on_action.call(action),
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    tap: Rc<RefCell<Option<Callback<usize>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, tap: Callback<usize>, vm: Signal<QuizVm>) {
        *self.tap.borrow_mut() = Some(tap);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn tap(&self) -> Callback<usize> {
        (*self.tap.borrow()).expect("quiz tap registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
