//! Python entry script and dependency manifest.
//!
//! The entry script runs the same structure check as `umi-verify`, against
//! the same critical path list, so either can be used inside a project.

pub const MAIN_SCRIPT: &str = r#"
#!/usr/bin/env python3
'''
{{PROJECT_NAME_PY}} - Script Principal
Monitoreo Forestal con Análisis Geoespacial
'''

import os
import sys
from datetime import datetime
from pathlib import Path

# Agregar directorio de scripts al path
script_dir = Path(__file__).parent / "scripts" / "python"
sys.path.append(str(script_dir))

def verificar_estructura_proyecto():
    """Verifica que la estructura del proyecto esté completa"""
    print("🔍 Verificando estructura del proyecto: {{PROJECT_NAME_PY}}")
    print(f"📅 Fecha: {datetime.now().strftime('%Y-%m-%d %H:%M:%S')}")
    print("-" * 60)
    
    # Carpetas críticas que deben existir
    carpetas_criticas = [
{{CRITICAL_PATHS}}
    ]
    
    estructura_ok = True
    for carpeta in carpetas_criticas:
        if os.path.exists(carpeta):
            print(f"✅ {carpeta}")
        else:
            print(f"❌ {carpeta} - NO ENCONTRADO")
            estructura_ok = False
    
    if estructura_ok:
        print("\n🎉 Estructura del proyecto verificada correctamente")
    else:
        print("\n⚠️  Faltan algunas carpetas críticas del proyecto")
    
    return estructura_ok

def inicializar_configuracion():
    """Inicializa la configuración del proyecto"""
    config_file = "config/config.json"
    
    if os.path.exists(config_file):
        print(f"📋 Configuración encontrada: {config_file}")
    else:
        print(f"⚠️  Archivo de configuración no encontrado: {config_file}")
    
    # Verificar credenciales
    cred_dir = "config/credentials"
    if os.path.exists(cred_dir):
        cred_files = os.listdir(cred_dir)
        if cred_files:
            print(f"🔐 Archivos de credenciales: {len(cred_files)} encontrados")
        else:
            print("⚠️  No se encontraron archivos de credenciales")
    
def main():
    """Función principal del proyecto"""
    print("🌲" * 20)
    print("   PROYECTO: {{PROJECT_NAME_UPPER_PY}}")
    print(f"   MONITOREO FORESTAL")
    print("🌲" * 20)
    
    # Verificar estructura
    if not verificar_estructura_proyecto():
        print("\n❌ No se puede continuar con estructura incompleta")
        return
    
    # Inicializar configuración
    print("\n" + "=" * 60)
    inicializar_configuracion()
    
    # Aquí agregar la lógica específica del proyecto
    print("\n" + "=" * 60)
    print("🚀 Proyecto listo para desarrollo")
    print("\n📝 Próximos pasos sugeridos:")
    print("   1. Configurar credenciales en config/credentials/")
    print("   2. Agregar datos iniciales en data/raw_{{PROJECT_NAME_PY}}/")
    print("   3. Revisar documentación en documentation_MIAs/")
    print("   4. Desarrollar scripts específicos en scripts/python/")
    
    print("\n✨ ¡Proyecto inicializado exitosamente!")

if __name__ == "__main__":
    main()
"#;

pub const REQUIREMENTS: &str = r#"
# ================================================
# LIBRERÍAS PRINCIPALES PARA ANÁLISIS GEOESPACIAL
# ================================================

# Procesamiento geoespacial básico
geopandas>=0.14.0
pandas>=2.0.0
numpy>=1.24.0
shapely>=2.0.0
pyproj>=3.6.0
rasterio>=1.3.0

# Visualización y mapas
matplotlib>=3.7.0
seaborn>=0.12.0
folium>=0.14.0
plotly>=5.15.0
contextily>=1.4.0

# Google Earth Engine
earthengine-api>=0.1.350

# Análisis estadístico y machine learning
scikit-learn>=1.3.0
scipy>=1.11.0
xarray>=2023.6.0
statsmodels>=0.14.0

# Procesamiento de imágenes
opencv-python>=4.8.0
scikit-image>=0.21.0
pillow>=10.0.0

# Bases de datos y formatos
sqlalchemy>=2.0.0
psycopg2-binary>=2.9.0
fiona>=1.9.0
pyogrio>=0.7.0

# Utilidades y productividad
tqdm>=4.65.0
python-dotenv>=1.0.0
pyyaml>=6.0
requests>=2.31.0
click>=8.1.0
rich>=13.5.0

# Desarrollo y testing
pytest>=7.4.0
pytest-cov>=4.1.0
black>=23.7.0
flake8>=6.0.0

# Jupyter y notebooks
jupyter>=1.0.0
ipykernel>=6.25.0
jupyterlab>=4.0.0

# Reportes y documentación
reportlab>=4.0.0
jinja2>=3.1.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_lines_are_pinned() {
        let packages: Vec<&str> = REQUIREMENTS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        assert!(packages.contains(&"geopandas>=0.14.0"));
        assert!(packages.iter().all(|line| line.contains(">=")));
    }

    #[test]
    fn test_entry_script_next_steps() {
        assert!(MAIN_SCRIPT.contains("print(\"   4. Desarrollar scripts específicos en scripts/python/\")"));
        assert!(MAIN_SCRIPT.contains("print(f\"   MONITOREO FORESTAL\")"));
        assert!(MAIN_SCRIPT.contains("    # Carpetas críticas que deben existir"));
    }
}
