//! Text of every generated file
//!
//! Each function is a direct substitution of its arguments into a fixed
//! template. None of them touch the filesystem or the network.

use crate::package::PackageSpec;

/// Split a comma-separated dependency list, trimming each entry and dropping empty ones
pub fn parse_dependencies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect()
}

/// `requirements.txt`: one dependency per line
pub fn requirements(dependencies: &[String]) -> String {
    dependencies.join("\n")
}

pub fn readme(name: &str, description: &str) -> String {
    format!(
        "# {name}\n---\n\n{description}\n\n\
         This package has been automatically generated, \n\
         please edit this file for better description.\n"
    )
}

/// `requirements-dev.txt`, with `extra` appended verbatim
pub fn dev_requirements(extra: &str) -> String {
    format!(
        r#"# Testing packages
pytest

# Linting packages
flake8
flake8-builtins
flake8-comprehensions
flake8-import-order
flake8-mutable
flake8-print
flake8-quotes

# Debugging packages
ipython
ipykernel

{extra}
"#
    )
}

/// `setup.py`; `spdx_id` comes from the resolved license
pub fn setup_py(spec: &PackageSpec, spdx_id: &str) -> String {
    let name = spec.name();
    let description = spec.description();
    let author = spec.author_name();
    let email = spec.author_email();
    format!(
        r#"# This setup.py was autogenerated, please edit for further details
import os
from codecs import open

from setuptools import find_packages, setup

import versioneer

here = os.path.abspath(os.path.dirname(__file__))

# Dependencies.
with open('requirements.txt') as f:
    requirements = f.readlines()
install_requires = [t.strip() for t in requirements]

with open(os.path.join(here, 'README.md'), encoding='utf-8') as f:
    long_description = f.read()

setup(
    name='{name}',
    version=versioneer.get_version(),
    cmdclass=versioneer.get_cmdclass(),
    description='{description}',
    long_description=long_description,
    long_description_content_type='text/markdown',
    url='',
    author='{author}',
    author_email='{email}',
    maintainer='{author}',
    maintainer_email='{email}',
    python_requires='>=3',
    license='{spdx_id}',
    classifiers=[
        'Development Status :: 3 - Alpha',
        'Intended Audience :: Developers',
        'Topic :: Software Development :: Build Tools',
        'Operating System :: OS Independent',
        'Programming Language :: Python :: 3',
        'Topic :: Software Development :: Libraries :: Python Modules',
    ],
    keywords=[],
    include_package_data=True,
    packages=find_packages(),
    install_requires=install_requires,
)
"#
    )
}

/// `setup.cfg` with the versioneer section pointing into the package
pub fn setup_cfg(name: &str) -> String {
    format!(
        r#"[metadata]
# This includes the license file in the wheel.
license_file = LICENSE

[bdist_wheel]
universal=0

[versioneer]
VCS = git
style = pep440
versionfile_source = {name}/_version.py
versionfile_build = {name}/_version.py
tag_prefix = v
parentdir_prefix = {name}-
"#
    )
}

pub fn manifest(extra: &str) -> String {
    format!("include README.md\ninclude *.txt\n\n{extra}\n")
}

pub fn test_example() -> String {
    r#"# -*- coding: utf-8 -*-

def test_hello_world():
    text = 'Hello World'
    assert text == 'Hello World'
"#
    .to_string()
}

/// `.travis.yml` running pytest and flake8 against the package
pub fn travis(name: &str) -> String {
    format!(
        r#"language: python

dist: xenial

matrix:
  fast_finish: true
  include:
  - python: 3.7
    env: TEST_TARGET=default
  - python: 3.7
    env: TEST_TARGET=coding_standards
  allow_failures:
  - python: 3.7
    env: TEST_TARGET=coding_standards

before_install:
  - |
    URL="https://repo.anaconda.com/miniconda/Miniconda3-latest-Linux-x86_64.sh"
    if [ ! -f $HOME/miniconda/bin/conda ] ; then
      echo "Fresh miniconda installation."
      wget $URL -O miniconda.sh
      rm -rf $HOME/miniconda
      bash miniconda.sh -b -p $HOME/miniconda
    fi
  - export PATH="$HOME/miniconda/bin:$PATH"
  - conda update conda --yes
  - conda config --set show_channel_urls true
  - conda config --add channels conda-forge --force
  - conda create --yes -n TEST python=$TRAVIS_PYTHON_VERSION --file requirements.txt --file requirements-dev.txt
  - source activate TEST

# Test source distribution.
install:
  - python setup.py sdist && version=$(python setup.py --version) && pushd dist && pip install {name}-${{version}}.tar.gz && popd

script:
  - if [[ $TEST_TARGET == 'default' ]]; then
      cp -r tests /tmp && cd /tmp ;
      pytest -vv tests ;
    fi

  - if [[ $TEST_TARGET == 'coding_standards' ]]; then
      flake8 --max-line-length=105 {name} ;
    fi
"#
    )
}

pub fn flake8(name: &str) -> String {
    format!(
        r#"[flake8]
max-line-length = 105
select = C,E,F,W,B,B950
ignore = E203, E501, W503
exclude =
    .git,
    __pycache__,
    docs/conf.py,
    build,
    dist,
    versioneer.py,
    {name}/_version.py
"#
    )
}

pub fn authors(author_name: &str, author_email: &str) -> String {
    format!(
        "# Authors\n\n## Primary Author\n\n* {author_name} <{author_email}>\n\n\
         ## Contributors\n\nNone yet. Why not be the first?\n"
    )
}

pub fn contributing(name: &str, github_username: &str) -> String {
    format!(
        r#"# Contributing

Contributions are welcome, and they are greatly appreciated! Every little bit
helps, and credit will always be given.

## Report Bugs

Report bugs at https://github.com/{github_username}/{name}/issues.

If you are reporting a bug, please include:

* Your operating system name and version.
* Any details about your local setup that might be helpful in troubleshooting.
* Detailed steps to reproduce the bug.

## Get Started

1. Fork the `{name}` repo on GitHub.
2. Clone your fork locally:

       git clone git@github.com:your_name_here/{name}.git

3. Install your local copy into a virtual environment:

       cd {name}/
       pip install -r requirements.txt -r requirements-dev.txt
       pip install -e .

4. Create a branch for local development and make your changes locally.

5. When you're done, check that your changes pass flake8 and the tests:

       flake8 {name} tests
       pytest -vv tests

6. Commit your changes and open a pull request.
"#
    )
}

/// `<name>/__init__.py`
pub fn package_init(author_name: &str) -> String {
    format!("__author__ = '{author_name}'\n")
}

/// `.gitignore`: the remote template plus notebook checkpoints
pub fn gitignore(base: &str) -> String {
    format!("{base}\n# ipynb\n.ipynb_checkpoints\n")
}
