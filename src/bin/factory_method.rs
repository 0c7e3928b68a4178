use shape_factory::creator;

fn main() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    creator::run_factory_method_demo(&mut out)
}
