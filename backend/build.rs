use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = "<!DOCTYPE html><html><body><p>Frontend not built. Run <code>trunk build --release</code> in <code>frontend/</code>.</p></body></html>";

fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )
        .expect("copy frontend dist");
    } else if !embedded_dir.join("index.html").exists() {
        // include_dir! needs the directory to exist even without a frontend build.
        fs::create_dir_all(&embedded_dir).expect("create static/dist");
        fs::write(embedded_dir.join("index.html"), PLACEHOLDER_INDEX).expect("write placeholder index");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
