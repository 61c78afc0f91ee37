use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Catalog, QuizSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
pub struct TestApp {
    pub catalog: Catalog,
    pub settings: QuizSettings,
    pub seed: u64,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn round_seed(&self) -> Option<u64> {
        Some(self.seed)
    }

    fn flags_dir(&self) -> String {
        "flags".to_string()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Taps a flag through the view's own callback, then flushes the re-render.
    pub fn tap(&mut self, index: usize) {
        let tap = self.handles.tap();
        self.dom.in_runtime(|| tap.call(index));
        drive_dom(&mut self.dom);
    }

    /// Index of the correct flag in the round currently on screen.
    pub fn correct_index(&self) -> usize {
        let vm = self.handles.vm();
        self.dom
            .in_runtime(|| vm.peek().quiz().round().correct_index().value())
    }

    pub fn dialog_open(&self) -> bool {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.peek().dialog_open())
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(app: TestApp) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::new(app),
            handles: handles.clone(),
        },
    );
    ViewHarness { dom, handles }
}
