/// wire3d Terminal - spinning wireframe renderer
///
/// Usage: wire3d-terminal [path.obj] [--fill] [--fps N]
/// Without a path the built-in cube is rendered.
/// Controls:
///   - F: Toggle triangle fill
///   - Q/ESC/Ctrl-C: Quit

use nalgebra::Vector3;
use std::env;
use std::io;
use std::path::PathBuf;
use wire3d_core::{obj, Mesh, RenderConfig, RotationState, Scene};
use wire3d_terminal::TerminalApp;

const USAGE: &str = "Usage: wire3d-terminal [path.obj] [--fill] [--fps N]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    path: Option<PathBuf>,
    fill: bool,
    fps: Option<u32>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fill" => options.fill = true,
            "--fps" => {
                let value = args.next().ok_or("--fps needs a value")?;
                let fps = value
                    .parse::<u32>()
                    .ok()
                    .filter(|fps| *fps > 0)
                    .ok_or_else(|| format!("invalid frame rate: {}", value))?;
                options.fps = Some(fps);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option: {}", flag)),
            path => {
                if options.path.is_some() {
                    return Err(format!("unexpected argument: {}", path));
                }
                options.path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn load_mesh(options: &Options) -> io::Result<Mesh> {
    let rotation = RotationState::new(180.0, 0.0, 15.0);

    let Some(path) = &options.path else {
        log::info!("no mesh given, using the built-in cube");
        return Ok(Mesh::cube(2.0).with_rotation(rotation));
    };

    let mesh = obj::load_obj(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to load {}: {}", path.display(), e),
        )
    })?;

    Ok(mesh
        .with_rotation(rotation)
        .with_offset(Vector3::new(0.0, 1.2, 2.0)))
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = parse_args(env::args().skip(1)).map_err(|e| {
        eprintln!("{}", USAGE);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let mut config = RenderConfig {
        fill: options.fill,
        ..RenderConfig::default()
    };
    if let Some(fps) = options.fps {
        config.target_fps = fps;
    }

    let mesh = load_mesh(&options)?;
    let scene = Scene::new(vec![mesh], &config);

    let mut app = TerminalApp::new(scene, &config)?;
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
    }

    #[test]
    fn test_all_options() {
        let options = parse_args(args(&["--fill", "meshes/ship.obj", "--fps", "60"])).unwrap();
        assert_eq!(
            options,
            Options {
                path: Some(PathBuf::from("meshes/ship.obj")),
                fill: true,
                fps: Some(60),
            }
        );
    }

    #[test]
    fn test_rejected_arguments() {
        assert!(parse_args(args(&["--fps"])).is_err());
        assert!(parse_args(args(&["--fps", "0"])).is_err());
        assert!(parse_args(args(&["--fps", "fast"])).is_err());
        assert!(parse_args(args(&["--wire"])).is_err());
        assert!(parse_args(args(&["a.obj", "b.obj"])).is_err());
    }

    #[test]
    fn test_default_mesh_is_cube() {
        let mesh = load_mesh(&Options::default()).unwrap();
        assert_eq!(mesh.triangles.len(), 12);
        assert_eq!(mesh.rotation, RotationState::new(180.0, 0.0, 15.0));
    }

    #[test]
    fn test_missing_mesh_file() {
        let options = Options {
            path: Some(PathBuf::from("no/such/mesh.obj")),
            ..Options::default()
        };
        let err = load_mesh(&options).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
