//! Git ignore rules and LFS attributes.

pub const GITIGNORE: &str = r#"
# ================================================
# CONFIGURACIÓN GIT PARA PROYECTOS FORESTALES GIS
# ================================================

# CREDENCIALES Y CONFIGURACIÓN SENSIBLE
config/credentials/*.json
config/credentials/*.key
config/credentials/*.pem
!config/credentials/*_template.json
.env
.env.local
.env.production
secrets.yaml

# DATOS GEOESPACIALES (MUY PESADOS PARA GIT)
data/raw_*/
data/temp_*/
data/processed_*/
!data/**/README.md
!data/**/metadata.xml

# Archivos específicos GIS
*.tif
*.tiff
*.tfw
*.img
*.bil
*.bip
*.bsq
*.shp
*.shx
*.dbf
*.prj
*.cpg
*.sbn
*.sbx
*.xml
*.aux
*.ovr
*.rrd
*.lyr
*.lyrx
*.qml
*.qgs

# Geodatabases y bases de datos
*.gdb/
*.mdb
*.accdb
*.sqlite
*.db

# ArcGIS
*.mxd.bak
*.aprx.bak
*.tbx.bak
*.style.bak
*.lyrx.bak
Scratch.gdb/
*.lock
*.sr.lock

# QGIS
*.qgs~
*.qgz

# PYTHON
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# AMBIENTES VIRTUALES
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/
conda_env/
.conda/

# JUPYTER NOTEBOOK
.ipynb_checkpoints
*.ipynb_checkpoints/
.jupyter/

# LOGS Y TEMPORALES
*.log
logs/
temp/
tmp/
*.tmp
*.temp
*.swp
*.swo

# CACHE Y COMPILADOS
*.cache
.cache/
.pytest_cache/
.coverage
htmlcov/
.tox/
.nox/

# SISTEMA OPERATIVO
# Windows
ehthumbs.db
Thumbs.db
Desktop.ini
$RECYCLE.BIN/

# macOS
.DS_Store
.DS_Store?
._*
.Spotlight-V100
.Trashes
.fseventsd
.VolumeIcon.icns
.com.apple.timemachine.donotpresent

# Linux
*~
.directory
.Trash-*

# IDEs Y EDITORES
# VSCode
.vscode/
*.code-workspace

# PyCharm
.idea/
*.iws
*.iml
*.ipr

# Sublime Text
*.sublime-project
*.sublime-workspace

# Vim
*.swp
*.swo
*~
.netrwhist

# DOCUMENTOS TEMPORALES
~$*.docx
~$*.xlsx
~$*.pptx
.~lock.*

# ARCHIVOS DE CONFIGURACIÓN LOCAL
local_settings.py
local_config.json
"#;

pub const GITATTRIBUTES: &str = r#"
# ================================================
# GIT LFS Y ATRIBUTOS PARA PROYECTOS FORESTALES
# ================================================

# GIT LFS - ARCHIVOS GRANDES AUTOMÁTICO
# Datos raster
*.tif filter=lfs diff=lfs merge=lfs -text
*.tiff filter=lfs diff=lfs merge=lfs -text
*.img filter=lfs diff=lfs merge=lfs -text
*.bil filter=lfs diff=lfs merge=lfs -text
*.bip filter=lfs diff=lfs merge=lfs -text
*.bsq filter=lfs diff=lfs merge=lfs -text

# Datos vectoriales grandes
*.shp filter=lfs diff=lfs merge=lfs -text
*.gdb/** filter=lfs diff=lfs merge=lfs -text

# Archivos comprimidos
*.zip filter=lfs diff=lfs merge=lfs -text
*.rar filter=lfs diff=lfs merge=lfs -text
*.7z filter=lfs diff=lfs merge=lfs -text
*.tar.gz filter=lfs diff=lfs merge=lfs -text

# Datos tabulares grandes (>10MB típicamente)
*.csv filter=lfs diff=lfs merge=lfs -text
*.xlsx filter=lfs diff=lfs merge=lfs -text
*.parquet filter=lfs diff=lfs merge=lfs -text

# Archivos de datos geoespaciales
*.geojson filter=lfs diff=lfs merge=lfs -text
*.kml filter=lfs diff=lfs merge=lfs -text
*.kmz filter=lfs diff=lfs merge=lfs -text
*.gpx filter=lfs diff=lfs merge=lfs -text

# Imágenes y multimedia
*.png filter=lfs diff=lfs merge=lfs -text
*.jpg filter=lfs diff=lfs merge=lfs -text
*.jpeg filter=lfs diff=lfs merge=lfs -text
*.bmp filter=lfs diff=lfs merge=lfs -text
*.gif filter=lfs diff=lfs merge=lfs -text
*.mp4 filter=lfs diff=lfs merge=lfs -text
*.avi filter=lfs diff=lfs merge=lfs -text
*.mov filter=lfs diff=lfs merge=lfs -text

# Modelos y datos científicos
*.nc filter=lfs diff=lfs merge=lfs -text
*.hdf filter=lfs diff=lfs merge=lfs -text
*.h5 filter=lfs diff=lfs merge=lfs -text

# CONFIGURACIÓN DE LÍNEAS DE FINAL
# Archivos de texto que siempre deben usar LF (Unix)
*.py text eol=lf
*.js text eol=lf
*.json text eol=lf
*.md text eol=lf
*.yml text eol=lf
*.yaml text eol=lf
*.txt text eol=lf
*.csv text eol=lf
*.sql text eol=lf
*.sh text eol=lf

# Archivos que siempre deben tratarse como binarios
*.exe binary
*.dll binary
*.so binary
*.dylib binary
*.pkl binary
*.pickle binary
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitignore_keeps_repeated_entries() {
        let count = |pattern: &str| GITIGNORE.lines().filter(|line| *line == pattern).count();

        assert_eq!(count(".env"), 2);
        assert_eq!(count("*.swp"), 2);
        assert_eq!(count("*.swo"), 2);
        assert_eq!(count("*~"), 2);
    }

    #[test]
    fn test_gitattributes_tracks_rasters_with_lfs() {
        assert!(GITATTRIBUTES.contains("*.tif filter=lfs diff=lfs merge=lfs -text"));
    }
}
