use dioxus::logger::tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");
    dioxus::launch(llhs_finance_site::app::App);
}
