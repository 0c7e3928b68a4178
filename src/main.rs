use shape_factory::driver;

fn main() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver::run_demo(&mut out)
}
