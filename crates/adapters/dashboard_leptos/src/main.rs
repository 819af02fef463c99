// WASM entrypoint for Trunk.

fn main() {
    repohelper_adapter_dashboard_leptos::start();
}
