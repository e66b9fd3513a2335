use attackgen::emit;

fn main() -> std::io::Result<()> {
    emit::generate_file()
}
