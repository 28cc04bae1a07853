use server::App;

fn main() -> std::process::ExitCode {
    server::launch(App::Hello)
}
